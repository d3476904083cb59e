use color_eyre::eyre::Result;
use dotenv::dotenv;
use tutorhub_api::config::ApiConfig;
use tutorhub_db::{create_pool, schema::initialize_database, seed::seed_admin};

/// Standalone schema bootstrap: creates tables, indexes, and the seed
/// admin account without starting the server.
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    let config = ApiConfig::from_env()?;

    let db_pool = create_pool(&config.database_url).await?;
    initialize_database(&db_pool).await?;
    seed_admin(
        &db_pool,
        &config.admin_username,
        &config.admin_password,
        &config.admin_email,
    )
    .await?;

    tracing::info!("Database migration complete");

    Ok(())
}
