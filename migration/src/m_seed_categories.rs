use sea_orm_migration::prelude::*;
use uuid::Uuid;

use crate::m20240101_000002_create_categories_table::Category;

const CATEGORIES: [(&str, &str, &str); 7] = [
    ("General", "general", "General news and discussions"),
    ("Java", "java", "Java, JVM and the Spring ecosystem"),
    ("Python", "python", "Python language and libraries"),
    ("Go", "go", "Go language and tooling"),
    ("JavaScript", "javascript", "JavaScript, TypeScript and web frameworks"),
    ("DevOps", "devops", "Infrastructure, CI/CD and cloud"),
    ("Career", "career", "Career advice and interviews"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut stmt = Query::insert();
        stmt.into_table(Category::Table).columns([
            Category::Id,
            Category::Name,
            Category::Slug,
            Category::Description,
            Category::DisplayOrder,
        ]);
        for (display_order, (name, slug, description)) in (1_i32..).zip(CATEGORIES) {
            stmt.values([
                Uuid::now_v7().into(),
                name.into(),
                slug.into(),
                description.into(),
                display_order.into(),
            ])
            .map_err(|e| DbErr::Custom(e.to_string()))?;
        }
        manager.exec_stmt(stmt).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let slugs = CATEGORIES.map(|(_, slug, _)| slug);
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Category::Table)
                    .and_where(Expr::col(Category::Slug).is_in(slugs))
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}
