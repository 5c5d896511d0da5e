use super::{DEFAULT_HOST, DEFAULT_PORT};
use crate::core::ConfigProvider;
use crate::utils::error::{CafeError, Result};
use crate::utils::validation::{validate_host, validate_range, validate_required_field, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: ServerSection,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub json: bool,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| CafeError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| CafeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })?;
        validate_required_field("server.port", &config.server.port)?;
        Ok(config)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_host("server.host", &self.server.host)?;
        let port = validate_required_field("server.port", &self.server.port)?;
        validate_range("server.port", *port, 1, u16::MAX)
    }
}

impl ConfigProvider for TomlConfig {
    fn host(&self) -> &str {
        &self.server.host
    }

    fn port(&self) -> u16 {
        self.server.port.unwrap_or(DEFAULT_PORT)
    }

    fn verbose(&self) -> bool {
        self.logging.as_ref().map(|l| l.verbose).unwrap_or(false)
    }

    fn json_logs(&self) -> bool {
        self.logging.as_ref().map(|l| l.json).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
