use actix_web::{http, test};
use common::factory::{self, *};
use entities::user;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};

use crate::utils::{body_text, init_app, Connections};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user()
        .verified(false)
        .verification_token("token123")
        .insert(&db)
        .await?;

    let req = test::TestRequest::get()
        .uri(&format!("/verify-email?email={}&token=token123", user.email))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    assert!(body_text(res).await.contains("Email verified"));

    let user_in_db = user::Entity::find_by_id(user.id).one(&db).await?.unwrap();
    assert!(user_in_db.verified);

    Ok(())
}

#[actix_web::test]
async fn wrong_token() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user()
        .verified(false)
        .verification_token("token123")
        .insert(&db)
        .await?;

    let req = test::TestRequest::get()
        .uri(&format!("/verify-email?email={}&token=token456", user.email))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    assert!(body_text(res).await.contains("Email verification failed"));

    let user_in_db = user::Entity::find_by_id(user.id).one(&db).await?.unwrap();
    assert!(!user_in_db.verified);

    Ok(())
}

#[actix_web::test]
async fn missing_parameters() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get().uri("/verify-email").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    assert!(body_text(res).await.contains("Email verification failed"));

    Ok(())
}
