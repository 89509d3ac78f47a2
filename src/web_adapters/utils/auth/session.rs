use actix_session::Session;

pub const USER_ID_KEY: &str = "user_id";

pub fn get_user_id(session: &Session) -> Result<Option<uuid::Uuid>, String> {
    session.get(USER_ID_KEY).map_err(|e| e.to_string())
}
