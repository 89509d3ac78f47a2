use std::{io, net::TcpListener, sync::Arc};

use actix_web::{cookie::Key, dev::Server, middleware::Compress, web::Data, App, HttpServer};
use common::{db::init_db, settings::types::Settings};
use sea_orm::DbConn;
use server::{get_routes, get_session_key, session_middleware};
use use_cases::users::email::EmailService;
use web_adapters::SmtpEmailService;

fn startup_error(e: impl ToString) -> io::Error {
    let message = e.to_string();
    tracing::event!(target: "backend", tracing::Level::ERROR, "Failed to start application: {}", message);
    io::Error::new(io::ErrorKind::Other, message)
}

pub struct Application {
    host: String,
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(settings: Settings) -> Result<Self, io::Error> {
        let db = init_db(&settings).await.map_err(startup_error)?;
        let email_service: Arc<dyn EmailService> =
            Arc::new(SmtpEmailService::init(&settings.email).map_err(startup_error)?);
        let session_key = get_session_key(&settings).map_err(startup_error)?;

        let address = format!(
            "{}:{}",
            settings.application.host, settings.application.port
        );
        let listener = TcpListener::bind(&address)?;
        let host = settings.application.host.clone();
        let port = listener.local_addr()?.port();
        let server = run(listener, db, email_service, session_key, settings)?;

        Ok(Self { host, port, server })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), io::Error> {
        self.server.await
    }
}

fn run(
    listener: TcpListener,
    db: DbConn,
    email_service: Arc<dyn EmailService>,
    session_key: Key,
    settings: Settings,
) -> Result<Server, io::Error> {
    let db = Data::new(db);
    let email_service: Data<dyn EmailService> = Data::from(email_service);
    let settings = Data::new(settings);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(session_middleware(&settings, session_key.clone()))
            .configure(get_routes)
            .app_data(db.clone())
            .app_data(email_service.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
