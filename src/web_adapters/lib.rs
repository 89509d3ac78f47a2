mod posts;
mod users;
mod utils;

pub use posts::post_routes;
pub use users::user_routes;
pub use utils::emails::SmtpEmailService;
