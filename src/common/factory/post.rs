use chrono::{DateTime, FixedOffset, Utc};
use entities::post;
use sea_orm::Set;
use uuid::Uuid;

pub fn post(category_id: Uuid, created_by: Uuid) -> post::ActiveModel {
    let now = Utc::now();
    post::ActiveModel {
        id: Set(Uuid::now_v7()),
        title: Set("Post title".to_string()),
        url: Set(None),
        content: Set("Post content".to_string()),
        category_id: Set(category_id),
        created_by: Set(created_by),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub trait PostFactory {
    fn title(self, title: &str) -> post::ActiveModel;
    fn url(self, url: Option<String>) -> post::ActiveModel;
    fn created_at(self, created_at: DateTime<FixedOffset>) -> post::ActiveModel;
}

impl PostFactory for post::ActiveModel {
    fn title(mut self, title: &str) -> post::ActiveModel {
        self.title = Set(title.to_string());
        self
    }

    fn url(mut self, url: Option<String>) -> post::ActiveModel {
        self.url = Set(url);
        self
    }

    fn created_at(mut self, created_at: DateTime<FixedOffset>) -> post::ActiveModel {
        self.created_at = Set(created_at);
        self.updated_at = Set(created_at);
        self
    }
}
