use actix_web::{http, test};
use common::factory::{self, *};
use sea_orm::{ActiveModelTrait, DbErr};

use crate::utils::{body_text, follow_redirect, init_app, location, session_cookie, Connections};

// argon2id hash of "password"
const HASHED_PASSWORD: &str = "$argon2id$v=19$m=19456,t=2,p=1$r07vWFCaKrbNPrSgUrG/+Q$/2lBaeRWeox6ROMu6qAwOYmttdGXA3o4Uw2YHC/fvfY";

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user()
        .password(HASHED_PASSWORD)
        .insert(&db)
        .await?;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("email", user.email.as_str()), ("password", "password")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::SEE_OTHER);
    assert_eq!(location(&res), Some("/"));
    assert!(session_cookie(&res).is_some());

    Ok(())
}

#[actix_web::test]
async fn incorrect_password() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user()
        .password(HASHED_PASSWORD)
        .insert(&db)
        .await?;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("email", user.email.as_str()), ("password", "passworda")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    assert!(body_text(res).await.contains("Invalid credentials"));

    Ok(())
}

#[actix_web::test]
async fn unknown_email() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("email", "nobody@test.com"), ("password", "password")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    assert!(body_text(res).await.contains("Invalid credentials"));

    Ok(())
}

#[actix_web::test]
async fn unverified_user() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user()
        .verified(false)
        .password(HASHED_PASSWORD)
        .insert(&db)
        .await?;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("email", user.email.as_str()), ("password", "password")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    assert!(body_text(res)
        .await
        .contains("Please verify your email before logging in"));

    Ok(())
}

#[actix_web::test]
async fn logout() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user()
        .password(HASHED_PASSWORD)
        .insert(&db)
        .await?;
    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("email", user.email.as_str()), ("password", "password")])
        .to_request();
    let res = test::call_service(&app, req).await;
    let cookie = session_cookie(&res).unwrap();

    let req = test::TestRequest::post()
        .uri("/logout")
        .cookie(cookie)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::SEE_OTHER);
    assert_eq!(location(&res), Some("/login"));

    let body = follow_redirect(&app, res).await;
    assert!(body.contains("You have been logged out"));

    Ok(())
}
