//! GymBuddy Membership API
//!
//! Main application entry point

use tracing::info;

use GymBuddy::{
    config::Settings,
    database::{connection, DatabaseService},
    http::{build_router, AppState},
    services::ServiceFactory,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting GymBuddy API...");

    // Initialize database connection
    info!("Connecting to database...");
    let db_config = connection::DatabaseConfig::from(&settings.database);
    let pool = connection::create_pool(&db_config).await?;

    // Run database migrations
    connection::run_migrations(&pool).await?;

    // Initialize services
    info!("Initializing services...");
    let database = DatabaseService::new(pool.clone());
    let services = ServiceFactory::new(database, settings.clone())?;

    let state = AppState { services, pool };
    let app = build_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("GymBuddy API listening on {}", addr);

    axum::serve(listener, app).await?;

    info!("GymBuddy API has been shut down.");

    Ok(())
}
