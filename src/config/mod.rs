#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_host, validate_range, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// Resolved runtime settings, whichever source they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub verbose: bool,
    pub json_logs: bool,
}

impl ServerSettings {
    pub fn from_provider(provider: &impl ConfigProvider) -> Self {
        Self {
            host: provider.host().to_string(),
            port: provider.port(),
            verbose: provider.verbose(),
            json_logs: provider.json_logs(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            verbose: false,
            json_logs: false,
        }
    }
}

impl ConfigProvider for ServerSettings {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn verbose(&self) -> bool {
        self.verbose
    }

    fn json_logs(&self) -> bool {
        self.json_logs
    }
}

impl Validate for ServerSettings {
    fn validate(&self) -> Result<()> {
        validate_host("server.host", &self.host)?;
        validate_range("server.port", self.port, 1, u16::MAX)
    }
}
