//! Menu Server - restaurant menu catalog and customer service
//!
//! # Module structure
//!
//! ```text
//! menu-server/src/
//! ├── core/          # config, state, server lifecycle
//! ├── services/      # catalog and customer rules, HTTP assembly
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SQLite pool and repositories
//! └── utils/         # errors, logging, validation, money
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use self::core::{Config, Server, ServerError, ServerState};
pub use services::{HttpService, build_app};
pub use services::http::build_router;
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialise logging from the environment
pub fn setup_environment() -> Result<(), ServerError> {
    dotenv::dotenv().ok();

    let level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    let json = std::env::var("LOG_JSON").ok().map(|v| v == "true" || v == "1");
    if let Some(dir) = &log_dir {
        std::fs::create_dir_all(dir)?;
    }
    init_logger_with_file(level.as_deref(), json, log_dir.as_deref());
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
  __  __                    ____
 |  \/  | ___ _ __  _   _  / ___|  ___ _ ____   _____ _ __
 | |\/| |/ _ \ '_ \| | | | \___ \ / _ \ '__\ \ / / _ \ '__|
 | |  | |  __/ | | | |_| |  ___) |  __/ |   \ V /  __/ |
 |_|  |_|\___|_| |_|\__,_| |____/ \___|_|    \_/ \___|_|
    "#
    );
}
