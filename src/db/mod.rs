pub mod queries;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::SqlitePool;

pub use queries::categories::Category;
pub use queries::questions::Question;

use sqlx::Error;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn establish_connection(path: &str) -> Result<SqlitePool, Error> {
    SqlitePool::connect(format!("sqlite:{}", path).as_str()).await
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}
