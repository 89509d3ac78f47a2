use actix_web::{http, test};
use common::factory::{self, *};
use sea_orm::{ActiveModelTrait, DbErr};

use crate::utils::{
    body_text, follow_redirect, init_app, init_app_with_email_service, location, session_cookie,
    Connections, RecordingEmailService,
};

#[actix_web::test]
async fn form_is_rendered() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get()
        .uri("/resendVerification")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let body = body_text(res).await;
    assert!(body.contains("Resend verification email"));
    assert!(body.contains("name=\"email\" value=\"\""));

    Ok(())
}

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections {
        app,
        db,
        email_service,
        ..
    } = init_app().await?;
    let user = factory::user()
        .verified(false)
        .verification_token("current-token")
        .insert(&db)
        .await?;

    let req = test::TestRequest::post()
        .uri("/resendVerification")
        .set_form([("email", user.email.as_str())])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::SEE_OTHER);
    assert_eq!(location(&res), Some("/registrationStatus"));

    let sent = email_service.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, user.email);
    assert_eq!(sent[0].template_name, "email/verify-email");
    assert_eq!(sent[0].subject, "TechBuzz - Email verification");
    assert_eq!(sent[0].params.get(""), Some(&user.name));
    assert!(sent[0]
        .params
        .get("verificationUrl")
        .unwrap()
        .ends_with("&token=current-token"));

    let body = follow_redirect(&app, res).await;
    assert!(body.contains(
        "reset verification link is sent on your provided email ID please check your email"
    ));

    Ok(())
}

#[actix_web::test]
async fn already_verified() -> Result<(), DbErr> {
    let Connections {
        app,
        db,
        email_service,
        ..
    } = init_app().await?;
    let user = factory::user().verified(true).insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/resendVerification")
        .set_form([("email", user.email.as_str())])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::SEE_OTHER);
    assert_eq!(location(&res), Some("/login"));
    assert!(email_service.sent().is_empty());

    let body = follow_redirect(&app, res).await;
    assert!(body.contains("account is already verified, please use forget password if needed"));

    Ok(())
}

#[actix_web::test]
async fn unknown_email() -> Result<(), DbErr> {
    let Connections {
        app, email_service, ..
    } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/resendVerification")
        .set_form([("email", "nobody@test.com")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::SEE_OTHER);
    assert_eq!(location(&res), Some("/registration"));
    assert!(email_service.sent().is_empty());

    let body = follow_redirect(&app, res).await;
    assert!(body.contains("reset verification failed, please try re-register"));

    Ok(())
}

#[actix_web::test]
async fn malformed_email() -> Result<(), DbErr> {
    let Connections {
        app, email_service, ..
    } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/resendVerification")
        .set_form([("email", "not-an-email")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    assert!(email_service.sent().is_empty());

    let body = body_text(res).await;
    assert!(body.contains("Invalid email"));
    assert!(body.contains("value=\"not-an-email\""));

    Ok(())
}

#[actix_web::test]
async fn send_failure_keeps_form() -> Result<(), DbErr> {
    let Connections { app, db, .. } =
        init_app_with_email_service(RecordingEmailService::failing()).await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/resendVerification")
        .set_form([("email", user.email.as_str())])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    assert_eq!(location(&res), None);

    let body = body_text(res).await;
    assert!(body.contains("Resend verification email"));
    assert!(body.contains(&format!("value=\"{}\"", user.email)));

    Ok(())
}

#[actix_web::test]
async fn flash_is_shown_once() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/resendVerification")
        .set_form([("email", "nobody@test.com")])
        .to_request();
    let res = test::call_service(&app, req).await;
    let cookie = session_cookie(&res).unwrap();

    let req = test::TestRequest::get()
        .uri("/registration")
        .cookie(cookie)
        .to_request();
    let res = test::call_service(&app, req).await;
    let cookie = session_cookie(&res);
    assert!(body_text(res)
        .await
        .contains("reset verification failed, please try re-register"));

    let mut req = test::TestRequest::get().uri("/registration");
    if let Some(cookie) = cookie {
        req = req.cookie(cookie);
    }
    let res = test::call_service(&app, req.to_request()).await;
    assert!(!body_text(res)
        .await
        .contains("reset verification failed, please try re-register"));

    Ok(())
}
