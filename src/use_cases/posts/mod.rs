pub mod list_by_category;
pub mod list_categories;
pub mod types;
