use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use tracing::{debug, info};

use crate::error::AppResult;

const PRAGMAS: [&str; 2] = ["PRAGMA journal_mode=WAL", "PRAGMA synchronous=NORMAL"];

pub async fn connect_and_migrate(database_url: &str) -> AppResult<DatabaseConnection> {
    let in_memory = database_url.contains(":memory:");

    let mut options = ConnectOptions::new(database_url.to_string());
    options.sqlx_logging(false);
    if in_memory {
        // every pooled connection would otherwise open its own empty database
        options.max_connections(1).min_connections(1);
    }

    let db = Database::connect(options).await?;

    if !in_memory {
        for pragma in PRAGMAS {
            db.execute(Statement::from_string(db.get_database_backend(), pragma.to_string()))
                .await?;
        }
    }

    Migrator::up(&db, None).await?;
    debug!(in_memory, "migrations applied");
    info!("database ready");

    Ok(db)
}
