use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct LumaConfig {
    pub llm: LlmConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LlmConfig {
    /// Credential for the chat-completion API. Usually supplied via `OPENAI_API_KEY`.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// When set, logs are also written to daily-rotated files in this directory.
    pub dir: Option<String>,
    /// Rotated files kept per log file; `0` keeps them all.
    pub max_files: usize,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".into(),
            model: "gpt-4".into(),
            temperature: 0.7,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_lumalite_dir()
            .join("lumalite.db")
            .to_string_lossy()
            .into_owned();
        Self { db_path }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            dir: None,
            max_files: 14,
        }
    }
}

/// Returns `~/.lumalite/`, falling back to the working directory when no home exists.
pub fn default_lumalite_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".lumalite")
}

/// Returns the default config file path: `~/.lumalite/config.toml`
pub fn default_config_path() -> PathBuf {
    default_lumalite_dir().join("config.toml")
}

impl LumaConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            LumaConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides.
    ///
    /// `OPENAI_API_KEY`, `OPENAI_BASE_URL`, `LUMALITE_MODEL`, `LUMALITE_DB`,
    /// `LOG_LEVEL` and `LUMALITE_LOG_DIR` win over the file.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("OPENAI_API_KEY") {
            self.llm.api_key = Some(val);
        }
        if let Ok(val) = std::env::var("OPENAI_BASE_URL") {
            self.llm.base_url = val;
        }
        if let Ok(val) = std::env::var("LUMALITE_MODEL") {
            self.llm.model = val;
        }
        if let Ok(val) = std::env::var("LUMALITE_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = std::env::var("LUMALITE_LOG_DIR") {
            self.logging.dir = Some(val);
        }
    }

    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }

    /// Resolve the log directory, if file logging is enabled.
    pub fn resolved_log_dir(&self) -> Option<PathBuf> {
        self.logging.dir.as_deref().map(expand_tilde)
    }

    /// The API key, or an error telling the user how to provide one.
    pub fn require_api_key(&self) -> Result<&str> {
        self.llm
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .context("no API key configured; set OPENAI_API_KEY or [llm].api_key in config.toml")
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
