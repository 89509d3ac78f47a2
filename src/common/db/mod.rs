use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

use crate::settings::types::Settings;

pub async fn init_db(settings: &Settings) -> Result<DbConn, DbErr> {
    let mut options = ConnectOptions::new(&settings.database.url);
    options
        .max_connections(settings.database.max_connections)
        .sqlx_logging(settings.debug);
    let db_conn = Database::connect(options).await?;
    Migrator::up(&db_conn, None).await?;
    Ok(db_conn)
}
