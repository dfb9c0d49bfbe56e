use chrono::Utc;
use sqlx::SqlitePool;

use super::SqliteInitError;

/// Ordered schema steps; a step's version is recorded once it commits.
const MIGRATIONS: &[(i64, &str)] = &[(
    1,
    r"
        CREATE TABLE IF NOT EXISTS kv_entries (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
    ",
)];

/// Bring the schema up to date, skipping versions already recorded.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), SqliteInitError> {
    sqlx::query(
        r"
            CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                applied_at TEXT NOT NULL
            );
        ",
    )
    .execute(pool)
    .await?;

    let applied: Vec<i64> = sqlx::query_scalar("SELECT version FROM schema_migrations")
        .fetch_all(pool)
        .await?;

    for &(version, ddl) in MIGRATIONS {
        if applied.contains(&version) {
            continue;
        }
        apply(pool, version, ddl).await?;
        tracing::debug!(version, "applied sqlite migration");
    }

    Ok(())
}

async fn apply(pool: &SqlitePool, version: i64, ddl: &str) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query(ddl).execute(&mut *tx).await?;
    sqlx::query("INSERT INTO schema_migrations (version, applied_at) VALUES (?1, ?2)")
        .bind(version)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;
    tx.commit().await
}
