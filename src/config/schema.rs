use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use directories::UserDirs;

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    pub api_key: Option<String>,
    pub default_provider: Option<String>,
    pub default_model: Option<String>,
    #[serde(default = "default_temperature")]
    pub default_temperature: f64,

    #[serde(default)]
    pub gateway: GatewayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_temperature() -> f64 {
    0.7
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# WellPulse configuration
#
# api_key          - text-generation provider key (or set OPENAI_API_KEY)
# default_provider - provider for `wellpulse brief` (currently: openai)

# api_key = \"sk-...\"
# default_provider = \"openai\"
# default_model = \"gpt-4o-mini\"
default_temperature = 0.7

[gateway]
host = \"127.0.0.1\"
port = 8080
";

impl Config {
    /// Load `~/.wellpulse/config.toml`, writing a commented default on the
    /// first run.
    pub fn load_or_init() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            return Self::load_from(&path);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        tracing::info!("📝 Wrote default config to {}", path.display());
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&raw)
            .map_err(|e| ConfigError::Load(format!("{}: {e}", path.display())))?;
        config.config_path = path.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.default_temperature) {
            return Err(ConfigError::Validation(format!(
                "default_temperature {} is outside [0, 2]",
                self.default_temperature
            )));
        }
        Ok(())
    }

    fn default_path() -> Result<PathBuf, ConfigError> {
        let dirs = UserDirs::new()
            .ok_or_else(|| ConfigError::Load("cannot determine home directory".to_string()))?;
        Ok(dirs.home_dir().join(".wellpulse").join("config.toml"))
    }
}
