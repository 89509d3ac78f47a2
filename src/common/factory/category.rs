use entities::category;
use sea_orm::Set;
use uuid::Uuid;

pub fn category() -> category::ActiveModel {
    let id = Uuid::now_v7();
    category::ActiveModel {
        id: Set(id),
        name: Set("Category".to_string()),
        slug: Set(format!("category-{}", id.simple())),
        description: Set(String::new()),
        display_order: Set(100),
    }
}

pub trait CategoryFactory {
    fn slug(self, slug: &str) -> category::ActiveModel;
    fn display_order(self, display_order: i32) -> category::ActiveModel;
}

impl CategoryFactory for category::ActiveModel {
    fn slug(mut self, slug: &str) -> category::ActiveModel {
        self.slug = Set(slug.to_string());
        self
    }

    fn display_order(mut self, display_order: i32) -> category::ActiveModel {
        self.display_order = Set(display_order);
        self
    }
}
