pub mod category_adapter;
pub mod post_adapter;
pub mod user_adapter;

pub use sea_orm::Order;
