//! BikeStore Server - inventory and order management for a retail bicycle chain
//!
//! # Architecture
//!
//! - **Database** (`db`): embedded SurrealDB storage, models and repositories
//! - **Auth** (`auth`): JWT + Argon2 authentication with role checks
//! - **HTTP API** (`api`): RESTful resource routes and reports
//!
//! # Module layout
//!
//! ```text
//! store-server/src/
//! ├── core/          # configuration, state, server bootstrap
//! ├── auth/          # JWT authentication, role middleware
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # database layer (models + repositories)
//! └── utils/         # errors, responses, logging, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Prepare the process environment: dotenv, data directory, logging
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".into());
    std::fs::create_dir_all(&data_dir)?;

    let log_dir = format!("{}/logs", data_dir);
    std::fs::create_dir_all(&log_dir)?;

    let log_level = std::env::var("LOG_LEVEL").ok();
    init_logger_with_file(log_level.as_deref(), Some(&log_dir));

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____  _ __       _____ __
   / __ )(_) /_____ / ___// /_____  ________
  / __  / / //_/ _ \__ \/ __/ __ \/ ___/ _ \
 / /_/ / / ,< /  __/__/ / /_/ /_/ / /  /  __/
/_____/_/_/|_|\___/____/\__/\____/_/   \___/

           BikeStore Server v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
