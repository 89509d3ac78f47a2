use actix_session::Session;
use actix_web::{
    get,
    web::{Data, Path, Query},
    HttpResponse,
};
use common::settings::types::Settings;
use db_adapters::{category_adapter::CategoryAdapter, post_adapter::PostAdapter};
use minijinja::context;
use sea_orm::DbConn;
use serde::Deserialize;
use use_cases::{
    posts::{list_by_category::get_posts_by_category, list_categories::get_all_categories},
    users::types::FieldErrors,
};

use crate::utils::{flash::take_flash, response_500, templates::view_response};

#[derive(Deserialize, Debug)]
pub struct PageQuery {
    page: Option<i64>,
}

#[tracing::instrument(name = "Listing posts by category", skip(db, settings, session))]
#[get("/c/{category}")]
pub async fn list_posts_by_category_endpoint(
    db: Data<DbConn>,
    settings: Data<Settings>,
    session: Session,
    path: Path<String>,
    query: Query<PageQuery>,
) -> HttpResponse {
    let category = path.into_inner();
    let page = query.page.unwrap_or(1);
    let posts_data = match get_posts_by_category(
        &category,
        page,
        settings.application.posts_per_page,
        PostAdapter::init(&db),
    )
    .await
    {
        Ok(posts_data) => posts_data,
        Err(e) => return response_500(e),
    };
    let categories = match get_all_categories(CategoryAdapter::init(&db)).await {
        Ok(categories) => categories,
        Err(e) => return response_500(e),
    };

    view_response(
        "posts",
        context! {
            header => format!("Posts by category : {category}"),
            pagination_prefix => format!("/c/{category}?"),
            posts_data => posts_data,
            categories => categories,
            flash => take_flash(&session),
            errors => FieldErrors::default(),
        },
    )
}
