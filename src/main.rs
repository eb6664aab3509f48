use dotenvy::dotenv;
use tiffin::config;
use tiffin::errors::Result;
use tiffin::http::{self, AppState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Connect and ensure the schema exists
    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    config::database::create_tables(&db).await?;

    // 4. Seed the menu from menu.toml when present and the catalog is empty
    if std::path::Path::new(config::menu::DEFAULT_MENU_PATH).exists() {
        let menu = config::menu::load_default_config()?;
        let seeded = config::menu::seed_menu(&db, &menu).await?;
        info!(seeded, "Menu seeding complete.");
    } else {
        info!("No menu.toml found; skipping menu seeding.");
    }

    // 5. Serve the API
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .inspect_err(|e| error!("Failed to bind {bind_addr}: {e}"))?;
    info!(%bind_addr, "Serving the ordering API.");

    http::serve(listener, AppState::new(db)).await
}
