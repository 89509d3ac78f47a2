use std::future::Future;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, QueryFilter,
    Select, Set,
};
use uuid::Uuid;

use entities::user::{ActiveModel, Column, Entity, Model};

#[derive(Clone)]
pub struct UserAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> UserAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait UserFilter {
    fn filter_eq_verified(self, verified: bool) -> Self;
    fn filter_eq_verification_token(self, token: &str) -> Self;
}

impl UserFilter for UserAdapter<'_> {
    fn filter_eq_verified(mut self, verified: bool) -> Self {
        self.query = self.query.filter(Column::Verified.eq(verified));
        self
    }

    fn filter_eq_verification_token(mut self, token: &str) -> Self {
        self.query = self.query.filter(Column::VerificationToken.eq(token));
        self
    }
}

pub trait UserQuery {
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_by_email(self, email: String) -> impl Future<Output = Result<Option<Model>, DbErr>>;
}

impl UserQuery for UserAdapter<'_> {
    async fn get_by_id(self, id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }

    async fn get_by_email(self, email: String) -> Result<Option<Model>, DbErr> {
        self.query
            .filter(Column::Email.eq(email))
            .one(self.db)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub password: String,
    pub name: String,
    pub verification_token: String,
    pub verified: bool,
}

pub trait UserMutation {
    fn create(self, params: CreateUserParams) -> impl Future<Output = Result<Model, DbErr>>;
    fn verify(self, user: Model) -> impl Future<Output = Result<Model, DbErr>>;
    fn delete(self, user: Model) -> impl Future<Output = Result<(), DbErr>>;
}

impl UserMutation for UserAdapter<'_> {
    async fn create(self, params: CreateUserParams) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            id: Set(Uuid::now_v7()),
            email: Set(params.email),
            password: Set(params.password),
            name: Set(params.name),
            verified: Set(params.verified),
            verification_token: Set(params.verification_token),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(self.db)
        .await
    }

    async fn verify(self, user: Model) -> Result<Model, DbErr> {
        let mut user = user.into_active_model();
        user.verified = Set(true);
        user.updated_at = Set(Utc::now().into());
        user.update(self.db).await
    }

    async fn delete(self, user: Model) -> Result<(), DbErr> {
        user.into_active_model().delete(self.db).await.map(|_| ())
    }
}
