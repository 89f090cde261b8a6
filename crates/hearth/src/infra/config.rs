//! Configuration management utilities.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use dirs_next::config_dir;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static DEFAULT_CONFIG: Lazy<&'static str> =
    Lazy::new(|| include_str!("../../assets/default-config.toml"));
static DEFAULT_WORKSPACE_CONFIG_PATH: &str = ".hearth/config.toml";

/// Layered configuration loaded from defaults, user, workspace, and env.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub geocoder: GeocoderConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "BackendConfig::default_url")]
    pub url: String,
    #[serde(default)]
    pub api_key: String,
}

impl BackendConfig {
    fn default_url() -> String {
        "https://demo.hearthmarket.dev".to_owned()
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: Self::default_url(),
            api_key: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeocoderConfig {
    #[serde(default = "GeocoderConfig::default_url")]
    pub url: String,
}

impl GeocoderConfig {
    fn default_url() -> String {
        "https://nominatim.openstreetmap.org/search".to_owned()
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            url: Self::default_url(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "UiConfig::default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default = "UiConfig::default_status_secs")]
    pub status_secs: u64,
    #[serde(default = "UiConfig::default_featured")]
    pub featured: usize,
}

impl UiConfig {
    fn default_tick_ms() -> u64 {
        120
    }

    fn default_status_secs() -> u64 {
        4
    }

    fn default_featured() -> usize {
        6
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn status_ttl(&self) -> Duration {
        Duration::from_secs(self.status_secs)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: Self::default_tick_ms(),
            status_secs: Self::default_status_secs(),
            featured: Self::default_featured(),
        }
    }
}

/// Environment overrides for deployment-critical settings.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    backend_url: Option<String>,
    backend_key: Option<String>,
    geocoder_url: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            backend_url: env::var("HEARTH_BACKEND_URL").ok(),
            backend_key: env::var("HEARTH_BACKEND_KEY").ok(),
            geocoder_url: env::var("HEARTH_GEOCODER_URL").ok(),
        }
    }

    #[cfg(test)]
    fn for_tests(backend_url: &str, geocoder_url: &str) -> Self {
        Self {
            backend_url: Some(backend_url.to_owned()),
            backend_key: None,
            geocoder_url: Some(geocoder_url.to_owned()),
        }
    }
}

impl Config {
    /// Load configuration from defaults, user/global config, workspace config,
    /// and env overrides.
    pub fn load() -> Result<Self> {
        let env = EnvOverrides::from_env();
        let global = global_config_path();
        let workspace = workspace_config_path()?;
        Self::load_with_layers(global, workspace, env)
    }

    /// Load a single explicit config file over the embedded defaults,
    /// skipping the layered lookup. Env overrides still apply.
    pub fn load_at(path: &Path) -> Result<Self> {
        let defaults = Self::from_str(&DEFAULT_CONFIG)?;
        let overlay = Self::from_file(path)?;
        Ok(apply_env_overrides(
            defaults.merge(overlay),
            EnvOverrides::from_env(),
        ))
    }

    fn load_with_layers(
        global: Option<PathBuf>,
        workspace: Option<PathBuf>,
        env_overrides: EnvOverrides,
    ) -> Result<Self> {
        let mut layers: Vec<Config> = Vec::new();

        layers.push(Self::from_str(&DEFAULT_CONFIG)?);

        if let Some(global_path) = global.filter(|path| path.exists()) {
            layers.push(Self::from_file(&global_path)?);
        }

        if let Some(workspace_path) = workspace.filter(|path| path.exists()) {
            layers.push(Self::from_file(&workspace_path)?);
        }

        let merged = layers.into_iter().reduce(Config::merge).unwrap_or_default();
        Ok(apply_env_overrides(merged, env_overrides))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&data)
    }

    fn from_str(contents: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(contents).with_context(|| "failed to parse TOML config".to_string())?;
        Ok(config)
    }

    fn merge(self, other: Self) -> Self {
        Self {
            backend: merge_backend(self.backend, other.backend),
            geocoder: merge_geocoder(self.geocoder, other.geocoder),
            ui: merge_ui(self.ui, other.ui),
        }
    }
}

fn merge_backend(base: BackendConfig, overlay: BackendConfig) -> BackendConfig {
    BackendConfig {
        url: if overlay.url != BackendConfig::default_url() {
            overlay.url
        } else {
            base.url
        },
        api_key: if overlay.api_key.is_empty() {
            base.api_key
        } else {
            overlay.api_key
        },
    }
}

fn merge_geocoder(base: GeocoderConfig, overlay: GeocoderConfig) -> GeocoderConfig {
    GeocoderConfig {
        url: if overlay.url != GeocoderConfig::default_url() {
            overlay.url
        } else {
            base.url
        },
    }
}

fn merge_ui(base: UiConfig, overlay: UiConfig) -> UiConfig {
    UiConfig {
        tick_ms: if overlay.tick_ms != UiConfig::default_tick_ms() {
            overlay.tick_ms
        } else {
            base.tick_ms
        },
        status_secs: if overlay.status_secs != UiConfig::default_status_secs() {
            overlay.status_secs
        } else {
            base.status_secs
        },
        featured: if overlay.featured != UiConfig::default_featured() {
            overlay.featured
        } else {
            base.featured
        },
    }
}

fn global_config_path() -> Option<PathBuf> {
    config_dir().map(|base| base.join("hearth/config.toml"))
}

fn workspace_config_path() -> Result<Option<PathBuf>> {
    let cwd = env::current_dir()?;
    Ok(Some(cwd.join(DEFAULT_WORKSPACE_CONFIG_PATH)))
}

fn apply_env_overrides(mut config: Config, env: EnvOverrides) -> Config {
    if let Some(url) = env.backend_url {
        config.backend.url = url;
    }
    if let Some(key) = env.backend_key {
        config.backend.api_key = key;
    }
    if let Some(url) = env.geocoder_url {
        config.geocoder.url = url;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_uses_defaults_when_no_files() {
        let config = Config::load_with_layers(None, None, EnvOverrides::default())
            .expect("load default config");
        assert_eq!(config.backend.url, "https://demo.hearthmarket.dev");
        assert_eq!(config.geocoder.url, "https://nominatim.openstreetmap.org/search");
        assert_eq!(config.ui.tick_ms, 120);
    }

    #[test]
    fn merge_global_and_workspace() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let global = temp.path().join("config.toml");
        fs::write(
            &global,
            r#"
[backend]
url = "https://staging.hearthmarket.dev"
api_key = "global-key"
"#,
        )?;

        let workspace = temp.path().join("workspace.toml");
        fs::write(
            &workspace,
            r#"
[backend]
api_key = "workspace-key"
[ui]
featured = 3
"#,
        )?;

        let config = Config::load_with_layers(
            Some(global),
            Some(workspace),
            EnvOverrides::default(),
        )?;

        assert_eq!(config.backend.url, "https://staging.hearthmarket.dev");
        assert_eq!(config.backend.api_key, "workspace-key");
        assert_eq!(config.ui.featured, 3);
        assert_eq!(config.ui.tick_ms, 120);
        Ok(())
    }

    #[test]
    fn env_overrides_take_precedence() -> Result<()> {
        let overrides =
            EnvOverrides::for_tests("https://env.hearthmarket.dev", "https://geo.example.org");
        let config = Config::load_with_layers(None, None, overrides)?;
        assert_eq!(config.backend.url, "https://env.hearthmarket.dev");
        assert_eq!(config.geocoder.url, "https://geo.example.org");
        Ok(())
    }

    #[test]
    fn invalid_config_returns_error() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let file = temp.path().join("broken.toml");
        fs::write(&file, "this is not toml")?;
        let result = Config::from_file(&file);
        assert!(result.is_err());
        Ok(())
    }
}
