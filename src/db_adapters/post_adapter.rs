use std::future::Future;

use sea_orm::{
    ColumnTrait, DbConn, DbErr, EntityTrait, ItemsAndPagesNumber, JoinType::InnerJoin, LoaderTrait,
    Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};

use entities::{
    category,
    post::{Column, Entity, Model, Relation},
    user,
};

#[derive(Clone)]
pub struct PostAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> PostAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait PostJoin {
    fn join_category(self) -> Self;
}

impl PostJoin for PostAdapter<'_> {
    fn join_category(mut self) -> Self {
        self.query = self.query.join(InnerJoin, Relation::Category.def());
        self
    }
}

pub trait PostFilter {
    /// Requires `join_category`.
    fn filter_eq_category_slug(self, slug: &str) -> Self;
}

impl PostFilter for PostAdapter<'_> {
    fn filter_eq_category_slug(mut self, slug: &str) -> Self {
        self.query = self.query.filter(category::Column::Slug.eq(slug));
        self
    }
}

pub trait PostOrder {
    fn order_by_created_at(self, order: Order) -> Self;
    fn order_by_id(self, order: Order) -> Self;
}

impl PostOrder for PostAdapter<'_> {
    fn order_by_created_at(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::CreatedAt, order);
        self
    }

    fn order_by_id(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::Id, order);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostWithRelations {
    pub post: Model,
    pub category: Option<category::Model>,
    pub author: Option<user::Model>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostPage {
    pub posts: Vec<PostWithRelations>,
    pub total_elements: u64,
    pub total_pages: u64,
}

pub trait PostQuery {
    /// `page_index` is 0-based.
    fn get_page(
        self,
        page_index: u64,
        page_size: u64,
    ) -> impl Future<Output = Result<PostPage, DbErr>>;
}

impl PostQuery for PostAdapter<'_> {
    async fn get_page(self, page_index: u64, page_size: u64) -> Result<PostPage, DbErr> {
        let paginator = self.query.paginate(self.db, page_size.max(1));
        let ItemsAndPagesNumber {
            number_of_items,
            number_of_pages,
        } = paginator.num_items_and_pages().await?;
        // Beyond the last page the offset can exceed what the database accepts.
        if page_index >= number_of_pages {
            return Ok(PostPage {
                posts: vec![],
                total_elements: number_of_items,
                total_pages: number_of_pages,
            });
        }
        let posts = paginator.fetch_page(page_index).await?;
        if posts.is_empty() {
            return Ok(PostPage {
                posts: vec![],
                total_elements: number_of_items,
                total_pages: number_of_pages,
            });
        }

        let categories = posts.load_one(category::Entity, self.db).await?;
        let authors = posts.load_one(user::Entity, self.db).await?;

        Ok(PostPage {
            posts: posts
                .into_iter()
                .zip(categories)
                .zip(authors)
                .map(|((post, category), author)| PostWithRelations {
                    post,
                    category,
                    author,
                })
                .collect(),
            total_elements: number_of_items,
            total_pages: number_of_pages,
        })
    }
}
