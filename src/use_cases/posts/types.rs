use chrono::{DateTime, FixedOffset};
use db_adapters::post_adapter::PostWithRelations;
use entities::{category, user};
use serde::{Deserialize, Serialize};

/// One page of a larger collection. `page_number` is 1-based.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PagedResult<T> {
    pub data: Vec<T>,
    pub total_elements: u64,
    pub page_number: u64,
    pub total_pages: u64,
    pub is_first: bool,
    pub is_last: bool,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> PagedResult<T> {
    pub fn new(data: Vec<T>, total_elements: u64, page_number: u64, total_pages: u64) -> Self {
        Self {
            data,
            total_elements,
            page_number,
            total_pages,
            is_first: page_number <= 1,
            is_last: page_number >= total_pages,
            has_next: page_number < total_pages,
            has_previous: page_number > 1,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CategoryVisible {
    pub id: uuid::Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
}

impl From<category::Model> for CategoryVisible {
    fn from(value: category::Model) -> Self {
        Self {
            id: value.id,
            name: value.name,
            slug: value.slug,
            description: value.description,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthorVisible {
    pub id: uuid::Uuid,
    pub name: String,
}

impl From<user::Model> for AuthorVisible {
    fn from(value: user::Model) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PostVisible {
    pub id: uuid::Uuid,
    pub title: String,
    pub url: Option<String>,
    pub content: String,
    pub category: Option<CategoryVisible>,
    pub created_by: Option<AuthorVisible>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<PostWithRelations> for PostVisible {
    fn from(value: PostWithRelations) -> Self {
        Self {
            id: value.post.id,
            title: value.post.title,
            url: value.post.url,
            content: value.post.content,
            category: value.category.map(CategoryVisible::from),
            created_by: value.author.map(AuthorVisible::from),
            created_at: value.post.created_at,
            updated_at: value.post.updated_at,
        }
    }
}
