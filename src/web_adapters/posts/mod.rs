mod home;
mod list_by_category;

use actix_web::web::ServiceConfig;

pub fn post_routes(cfg: &mut ServiceConfig) {
    cfg.service(home::home_endpoint)
        .service(list_by_category::list_posts_by_category_endpoint);
}
