//! `migrate up` applies pending migrations, `migrate down` reverts all of them.

use anyhow::{bail, Context};
use sqlx::postgres::PgPoolOptions;

use eventhub::db::{run_migrations, MIGRATOR};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "migrate=info,sqlx=warn".into()),
        )
        .init();

    let direction = match std::env::args().nth(1) {
        Some(d) => d,
        None => bail!("please provide a migration command: up or down"),
    };

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let db = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .context("connect to database")?;

    match direction.as_str() {
        "up" => run_migrations(&db).await?,
        "down" => {
            MIGRATOR.undo(&db, 0).await.context("revert migrations")?;
            tracing::info!("migrations reverted");
        }
        other => bail!("invalid command {other:?}, use 'up' or 'down'"),
    }
    Ok(())
}
