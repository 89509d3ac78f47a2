use std::sync::{Arc, Mutex};

use actix_http::Request;
use actix_web::{
    cookie::{Cookie, Key},
    dev::{Service, ServiceResponse},
    http::header,
    test,
    web::Data,
    App,
};
use common::settings::types::Settings;
use sea_orm::{DbConn, DbErr};
use use_cases::users::email::{EmailParams, EmailService};

pub const POSTS_PER_PAGE: u64 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct SentEmail {
    pub template_name: String,
    pub params: EmailParams,
    pub to: String,
    pub subject: String,
}

/// Keeps every message instead of delivering it.
#[derive(Default)]
pub struct RecordingEmailService {
    sent: Mutex<Vec<SentEmail>>,
    fail: bool,
}

impl RecordingEmailService {
    /// Refuses every message, like an unreachable relay.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }
}

impl EmailService for RecordingEmailService {
    fn send_email(
        &self,
        template_name: &str,
        params: EmailParams,
        to: &str,
        subject: &str,
    ) -> Result<(), String> {
        if self.fail {
            return Err("SMTP relay unavailable".to_string());
        }
        self.sent.lock().unwrap().push(SentEmail {
            template_name: template_name.to_string(),
            params,
            to: to.to_string(),
            subject: subject.to_string(),
        });
        Ok(())
    }
}

pub struct Connections<S> {
    pub app: S,
    pub db: DbConn,
    pub email_service: Arc<RecordingEmailService>,
    pub settings: Settings,
}

pub async fn init_app() -> Result<
    Connections<impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>>,
    DbErr,
> {
    init_app_with_email_service(RecordingEmailService::default()).await
}

pub async fn init_app_with_email_service(
    email_service: RecordingEmailService,
) -> Result<
    Connections<impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>>,
    DbErr,
> {
    let db = test_utils::init_db().await?;
    let email_service = Arc::new(email_service);
    let mut settings = Settings::base_settings();
    settings.application.posts_per_page = POSTS_PER_PAGE;

    let email_service_data: Data<dyn EmailService> =
        Data::from(email_service.clone() as Arc<dyn EmailService>);
    let app = test::init_service(
        App::new()
            .wrap(server::session_middleware(&settings, Key::generate()))
            .configure(server::get_routes)
            .app_data(Data::new(db.clone()))
            .app_data(email_service_data)
            .app_data(Data::new(settings.clone())),
    )
    .await;
    Ok(Connections {
        app,
        db,
        email_service,
        settings,
    })
}

pub fn location(res: &ServiceResponse) -> Option<&str> {
    res.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

pub fn session_cookie(res: &ServiceResponse) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "sessionId")
        .map(|cookie| cookie.into_owned())
}

pub async fn body_text(res: ServiceResponse) -> String {
    let body = test::read_body(res).await;
    String::from_utf8(body.to_vec()).unwrap()
}

/// Follows a redirect with the session cookie it set and returns the rendered page.
pub async fn follow_redirect<S>(app: &S, res: ServiceResponse) -> String
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let uri = location(&res).unwrap().to_string();
    let mut req = test::TestRequest::get().uri(&uri);
    if let Some(cookie) = session_cookie(&res) {
        req = req.cookie(cookie);
    }
    let res = test::call_service(app, req.to_request()).await;
    body_text(res).await
}
