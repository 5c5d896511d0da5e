pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use self::config::cli::CliConfig;

pub use self::adapters::http::router;
pub use self::config::{toml_config::TomlConfig, ServerSettings};
pub use self::core::{filter::select_venues, request::CafeQuery, server::CafeServer};
pub use self::domain::{catalog::Catalog, model::Venue};
pub use self::utils::error::{CafeError, QueryError, Result};
