//! Fitness Center API - members and their workout sessions
//!
//! # Module layout
//!
//! ```text
//! fitness-server/src/
//! ├── core/          # config, state, server lifecycle
//! ├── api/           # HTTP routes and handlers
//! ├── schema/        # request validation and response projection
//! ├── db/            # SQLite pool, tables, repositories
//! ├── middleware/    # request logging
//! └── utils/         # errors, logger
//! ```
//!
//! Every handler runs one validate → persist → respond cycle against the
//! pool carried in [`ServerState`].

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod schema;
pub mod utils;

// Re-export public types
pub use api::{build_app, build_router};
pub use crate::core::{Config, Server, ServerState};
pub use db::DbService;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;
