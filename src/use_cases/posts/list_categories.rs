use db_adapters::{
    category_adapter::{CategoryAdapter, CategoryOrder, CategoryQuery},
    Order::Asc,
};

use crate::{error_500, posts::types::CategoryVisible, UseCaseError};

pub async fn get_all_categories<'a>(
    category_adapter: CategoryAdapter<'a>,
) -> Result<Vec<CategoryVisible>, UseCaseError> {
    category_adapter
        .order_by_display_order(Asc)
        .order_by_name(Asc)
        .get_all()
        .await
        .map(|categories| categories.into_iter().map(CategoryVisible::from).collect())
        .map_err(error_500)
}

/// The category the home page lands on.
pub async fn get_default_category<'a>(
    category_adapter: CategoryAdapter<'a>,
) -> Result<Option<CategoryVisible>, UseCaseError> {
    category_adapter
        .order_by_display_order(Asc)
        .order_by_name(Asc)
        .get_first()
        .await
        .map(|category| category.map(CategoryVisible::from))
        .map_err(error_500)
}
