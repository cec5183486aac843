// src/main.rs

use std::sync::Arc;

use actix_web::{web as actix_data, App, HttpServer};
use sqlx::PgPool;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

use inventory_app::config::AppConfig;
use inventory_app::repositories::PgProductRepository;
use inventory_app::services::ProductService;
use inventory_app::state::AppState;
use inventory_app::storage::AssetStore;
use inventory_app::web::configure_app_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting inventory application server...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg), // Arc the config for sharing
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  // Initialize Database Pool
  let db_pool = match PgPool::connect(&app_config.database_url).await {
    Ok(pool) => {
      tracing::info!("Successfully connected to the database.");
      pool
    }
    Err(e) => {
      tracing::error!(error = %e, "Failed to connect to the database.");
      panic!("Database connection error: {}", e);
    }
  };

  // Run embedded migrations if configured
  if app_config.run_migrations {
    if let Err(e) = sqlx::migrate!("./migrations").run(&db_pool).await {
      tracing::error!(error = %e, "Failed to run database migrations.");
      panic!("Migration error: {}", e);
    }
    tracing::info!("Database migrations applied.");
  }

  // Wire up the product service: Postgres repository + filesystem asset store
  let repository = Arc::new(PgProductRepository::new(db_pool.clone()));
  let asset_store = AssetStore::new(app_config.upload_dir.clone());
  let product_service = Arc::new(ProductService::new(repository, asset_store));

  let app_state = AppState {
    products: product_service,
    config: app_config.clone(),
  };

  // Configure and Start Actix Web Server
  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  let uploads_route = app_config.public_uploads_route.clone();
  let upload_dir = app_config.upload_dir.clone();

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
      // Stored files are exposed read-only at the public uploads route,
      // mapping 1:1 to the upload directory.
      .service(actix_files::Files::new(&uploads_route, upload_dir.clone()))
  })
  .bind(&server_address)?
  .run()
  .await
}
