use db_adapters::{
    post_adapter::{PostAdapter, PostFilter, PostJoin, PostOrder, PostQuery},
    Order::Desc,
};

use crate::{
    error_500,
    posts::types::{PagedResult, PostVisible},
    UseCaseError,
};

/// `page` is 1-based; anything below 1 reads the first page.
pub async fn get_posts_by_category<'a>(
    category: &str,
    page: i64,
    page_size: u64,
    post_adapter: PostAdapter<'a>,
) -> Result<PagedResult<PostVisible>, UseCaseError> {
    let page_number = u64::try_from(page).unwrap_or(0).max(1);
    post_adapter
        .join_category()
        .filter_eq_category_slug(category)
        .order_by_created_at(Desc)
        .order_by_id(Desc)
        .get_page(page_number - 1, page_size)
        .await
        .map(|page| {
            PagedResult::new(
                page.posts.into_iter().map(PostVisible::from).collect(),
                page.total_elements,
                page_number,
                page.total_pages,
            )
        })
        .map_err(error_500)
}
