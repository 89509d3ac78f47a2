use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// A fresh in-memory SQLite database with every migration applied.
///
/// The pool is pinned to a single connection because each SQLite memory
/// connection owns its own database.
pub async fn init_db() -> Result<DbConn, DbErr> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}
