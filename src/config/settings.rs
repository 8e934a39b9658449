// src/config/settings.rs
use anyhow::{anyhow, Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_LOCATION: &str = "Nairobi, Kenya";

const ENV_PREFIX: &str = "EPOWER";
const API_KEY_VAR: &str = "API_KEY";
const CONFIG_PATH_VAR: &str = "EPOWER_CONFIG";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub default_location: String,
    pub window_width: f32,
    pub window_height: f32,
}

/// `$EPOWER_CONFIG`, else `<config dir>/e-power/config.ron`.
pub fn config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join("e-power").join("config.ron")))
}

impl Settings {
    /// Defaults, then the optional RON file, then `EPOWER_*` variables.
    /// `API_KEY` is used when no key came from the layers above.
    pub fn load() -> Result<Self> {
        let path = config_path();
        Self::load_from(path.as_deref(), None, env::var(API_KEY_VAR).ok())
    }

    fn load_from(
        file: Option<&Path>,
        env_vars: Option<HashMap<String, String>>,
        fallback_api_key: Option<String>,
    ) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("model", DEFAULT_MODEL)?
            .set_default("api_base", DEFAULT_API_BASE)?
            .set_default("default_location", DEFAULT_LOCATION)?
            .set_default("window_width", 1100.0)?
            .set_default("window_height", 820.0)?;

        if let Some(path) = file {
            log::debug!("Reading settings from {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Ron).required(false));
        }

        let mut settings: Settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).source(env_vars))
            .build()?
            .try_deserialize()
            .context("Invalid settings")?;

        settings.api_key = settings
            .api_key
            .filter(|key| !key.trim().is_empty())
            .or_else(|| fallback_api_key.filter(|key| !key.trim().is_empty()));

        Ok(settings)
    }

    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| anyhow!("{} environment variable not set", API_KEY_VAR))
    }
}
