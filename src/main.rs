use color_eyre::eyre::Result;
use dotenv::dotenv;
use tutorhub_api::config::ApiConfig;
use tutorhub_db::{create_pool, schema::initialize_database, seed::seed_admin};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Create database connection pool
    let db_pool = create_pool(&config.database_url).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    // Ensure the admin account exists
    seed_admin(
        &db_pool,
        &config.admin_username,
        &config.admin_password,
        &config.admin_email,
    )
    .await?;

    // Start API server
    tutorhub_api::start_server(config, db_pool).await?;

    Ok(())
}
