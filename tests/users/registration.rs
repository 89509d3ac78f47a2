use actix_web::{http, test};
use common::factory::{self, *};
use entities::user;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter};

use crate::utils::{
    body_text, follow_redirect, init_app, init_app_with_email_service, location, Connections,
    RecordingEmailService,
};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections {
        app,
        db,
        email_service,
        ..
    } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/registration")
        .set_form([
            ("name", "Siva"),
            ("email", "siva@techbuzz.dev"),
            ("password", "secret"),
        ])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::SEE_OTHER);
    assert_eq!(location(&res), Some("/registrationStatus"));

    let user_in_db = user::Entity::find()
        .filter(user::Column::Email.eq("siva@techbuzz.dev"))
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(user_in_db.name, "Siva");
    assert!(!user_in_db.verified);
    assert!(user_in_db.password.starts_with("$argon2id$"));
    assert_eq!(user_in_db.verification_token.len(), 64);

    let sent = email_service.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "siva@techbuzz.dev");
    assert!(sent[0]
        .params
        .get("verificationUrl")
        .unwrap()
        .ends_with(&format!("&token={}", user_in_db.verification_token)));

    let body = follow_redirect(&app, res).await;
    assert!(body.contains("Registration is successful, please check your email to verify your account"));

    Ok(())
}

#[actix_web::test]
async fn duplicate_email() -> Result<(), DbErr> {
    let Connections {
        app,
        db,
        email_service,
        ..
    } = init_app().await?;
    let existing = factory::user().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/registration")
        .set_form([
            ("name", "Another Siva"),
            ("email", existing.email.as_str()),
            ("password", "secret"),
        ])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    assert!(email_service.sent().is_empty());

    let body = body_text(res).await;
    assert!(body.contains("Email already in use"));

    Ok(())
}

#[actix_web::test]
async fn invalid_form() -> Result<(), DbErr> {
    let Connections {
        app,
        db,
        email_service,
        ..
    } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/registration")
        .set_form([("name", " "), ("email", "siva@techbuzz.dev"), ("password", "abc")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    assert!(email_service.sent().is_empty());
    assert!(user::Entity::find().one(&db).await?.is_none());

    let body = body_text(res).await;
    assert!(body.contains("Name cannot be empty"));
    assert!(body.contains("Password must be at least 4 characters"));
    // The password is never echoed back.
    assert!(!body.contains("value=\"abc\""));

    Ok(())
}

#[actix_web::test]
async fn send_failure_leaves_no_user() -> Result<(), DbErr> {
    let Connections { app, db, .. } =
        init_app_with_email_service(RecordingEmailService::failing()).await?;

    let req = test::TestRequest::post()
        .uri("/registration")
        .set_form([
            ("name", "Siva"),
            ("email", "siva@techbuzz.dev"),
            ("password", "secret"),
        ])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    assert_eq!(location(&res), None);
    assert!(user::Entity::find().one(&db).await?.is_none());

    let body = body_text(res).await;
    assert!(body.contains("Registration failed, please try again"));

    Ok(())
}

#[actix_web::test]
async fn undeliverable_email() -> Result<(), DbErr> {
    let Connections {
        app,
        db,
        email_service,
        ..
    } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/registration")
        .set_form([("name", "Siva"), ("email", "a(b@x.com"), ("password", "secret")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    assert!(email_service.sent().is_empty());
    assert!(user::Entity::find().one(&db).await?.is_none());

    let body = body_text(res).await;
    assert!(body.contains("Invalid email"));

    Ok(())
}

#[actix_web::test]
async fn status_page_without_flash() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get()
        .uri("/registrationStatus")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let body = body_text(res).await;
    assert!(body.contains("Check your email for the verification link."));

    Ok(())
}
