use actix_session::Session;
use actix_web::{get, web::Data, HttpResponse};
use db_adapters::category_adapter::CategoryAdapter;
use minijinja::context;
use sea_orm::DbConn;
use use_cases::{
    posts::{list_categories::get_default_category, types::PagedResult},
    users::types::FieldErrors,
};

use crate::utils::{
    flash::{take_flash, Redirect},
    response_500,
    templates::view_response,
};

#[tracing::instrument(name = "Opening home page", skip(db, session))]
#[get("/")]
pub async fn home_endpoint(db: Data<DbConn>, session: Session) -> HttpResponse {
    match get_default_category(CategoryAdapter::init(&db)).await {
        Ok(Some(category)) => Redirect::to(format!("/c/{}", category.slug)).respond(&session),
        Ok(None) => view_response(
            "posts",
            context! {
                header => "Posts",
                pagination_prefix => "/?",
                posts_data => PagedResult::<()>::new(vec![], 0, 1, 0),
                categories => Vec::<()>::new(),
                flash => take_flash(&session),
                errors => FieldErrors::default(),
            },
        ),
        Err(e) => response_500(e),
    }
}
