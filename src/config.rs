// src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,

  // Where uploaded cover images live on disk.
  pub upload_dir: PathBuf,
  // Public route prefix under which `upload_dir` is served read-only.
  pub public_uploads_route: String,

  // Optional: run embedded sqlx migrations on startup.
  pub run_migrations: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL")?;

    let upload_dir = PathBuf::from(get_env("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string()));
    let public_uploads_route = get_env("PUBLIC_UPLOADS_ROUTE").unwrap_or_else(|_| "/uploads".to_string());

    let run_migrations = get_env("RUN_MIGRATIONS")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid RUN_MIGRATIONS value: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      upload_dir,
      public_uploads_route,
      run_migrations,
    })
  }
}
