use std::future::Future;

use sea_orm::{ColumnTrait, DbConn, DbErr, EntityTrait, Order, QueryFilter, QueryOrder, Select};

use entities::category::{Column, Entity, Model};

#[derive(Clone)]
pub struct CategoryAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> CategoryAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait CategoryOrder {
    fn order_by_display_order(self, order: Order) -> Self;
    fn order_by_name(self, order: Order) -> Self;
}

impl CategoryOrder for CategoryAdapter<'_> {
    fn order_by_display_order(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::DisplayOrder, order);
        self
    }

    fn order_by_name(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::Name, order);
        self
    }
}

pub trait CategoryQuery {
    fn get_all(self) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
    fn get_first(self) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_by_slug(self, slug: &str) -> impl Future<Output = Result<Option<Model>, DbErr>>;
}

impl CategoryQuery for CategoryAdapter<'_> {
    async fn get_all(self) -> Result<Vec<Model>, DbErr> {
        self.query.all(self.db).await
    }

    async fn get_first(self) -> Result<Option<Model>, DbErr> {
        self.query.one(self.db).await
    }

    async fn get_by_slug(self, slug: &str) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Slug.eq(slug)).one(self.db).await
    }
}
