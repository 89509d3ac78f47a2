use actix_session::Session;
use actix_web::{http::header, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{event, Level};

const FLASH_KEY: &str = "flash";

/// A message that survives exactly one redirect.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Flash {
    pub message: Option<String>,
    pub error_message: Option<String>,
}

impl Flash {
    pub fn message(text: &str) -> Self {
        Self {
            message: Some(text.to_string()),
            error_message: None,
        }
    }

    pub fn error(text: &str) -> Self {
        Self {
            message: None,
            error_message: Some(text.to_string()),
        }
    }
}

/// Removes and returns the pending flash, if any.
pub fn take_flash(session: &Session) -> Flash {
    match session.remove_as::<Flash>(FLASH_KEY) {
        Some(Ok(flash)) => flash,
        Some(Err(e)) => {
            event!(target: "backend", Level::WARN, "Discarding unreadable flash message: {}", e);
            Flash::default()
        }
        None => Flash::default(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Redirect {
    pub location: String,
    pub flash: Option<Flash>,
}

impl Redirect {
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            flash: None,
        }
    }

    pub fn with_flash(mut self, flash: Flash) -> Self {
        self.flash = Some(flash);
        self
    }

    /// 303 to `location`, storing the flash in the session first.
    pub fn respond(self, session: &Session) -> HttpResponse {
        if let Some(flash) = self.flash {
            if let Err(e) = session.insert(FLASH_KEY, flash) {
                event!(target: "backend", Level::WARN, "Flash message was not stored: {:#?}", e);
            }
        }
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, self.location))
            .finish()
    }
}
