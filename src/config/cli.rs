use super::toml_config::TomlConfig;
use super::{ServerSettings, DEFAULT_HOST, DEFAULT_PORT};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "cafe-api")]
#[command(about = "Serves venue lists per city over HTTP")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, help = "TOML config file; replaces the host, port and logging flags")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Final settings: the TOML file when `--config` is set, the flags otherwise.
    pub fn load(&self) -> Result<ServerSettings> {
        let settings = match &self.config {
            Some(path) => {
                let file_config = TomlConfig::from_file(path)?;
                file_config.validate()?;
                ServerSettings::from_provider(&file_config)
            }
            None => ServerSettings::from_provider(self),
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl ConfigProvider for CliConfig {
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["cafe-api"]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.config.is_none());
        assert!(!config.verbose);
        assert!(!config.json_logs);
    }

    #[test]
    fn test_flags_are_loaded() {
        let config = CliConfig::parse_from(["cafe-api", "--host", "0.0.0.0", "--port", "9000", "--verbose"]);
        let settings = config.load().unwrap();
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 9000);
        assert!(settings.verbose);
    }

    #[test]
    fn test_invalid_flags_fail_validation() {
        let config = CliConfig::parse_from(["cafe-api", "--port", "0"]);
        assert!(config.load().is_err());
    }

    #[test]
    fn test_config_file_replaces_flags() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nhost = \"0.0.0.0\"\nport = 9090\n\n[logging]\njson = true\n")
            .unwrap();

        let path = temp_file.path().to_str().unwrap();
        let config = CliConfig::parse_from(["cafe-api", "--port", "7000", "--config", path]);
        let settings = config.load().unwrap();
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 9090);
        assert!(settings.json_logs);
        assert!(!settings.verbose);
    }
}
