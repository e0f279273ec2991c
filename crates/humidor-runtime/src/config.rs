use crate::{Error, Result};
use humidor_engine::{CountryCatalog, DashboardSettings, OtherCountryScope, Panel};
use humidor_types::UserScope;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILE: &str = "config.toml";
pub const DATABASE_FILE: &str = "humidor.db";

/// Keys accepted by [`Config::set`].
pub const SETTING_KEYS: [&str; 5] = ["theme", "user_id", "top_n", "panels", "other_scope"];

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. HUMIDOR_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.humidor (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("HUMIDOR_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("humidor"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".humidor"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Colour scheme for console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Classic,
    Midnight,
    Plain,
}

impl ThemeName {
    pub const ALL: [ThemeName; 3] = [ThemeName::Classic, ThemeName::Midnight, ThemeName::Plain];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Classic => "classic",
            ThemeName::Midnight => "midnight",
            ThemeName::Plain => "plain",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ThemeName::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::Config(format!(
                    "unknown theme '{}': expected classic, midnight or plain",
                    s
                ))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CountrySettings {
    #[serde(default)]
    pub other_scope: OtherCountryScope,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_app_id")]
    pub app_id: String,
    #[serde(default = "default_user_id")]
    pub user_id: String,
    #[serde(default)]
    pub theme: ThemeName,
    #[serde(default)]
    pub dashboard: DashboardSettings,
    #[serde(default)]
    pub countries: CountrySettings,
}

fn default_app_id() -> String {
    "humidor-hub".to_string()
}

fn default_user_id() -> String {
    "local".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_id: default_app_id(),
            user_id: default_user_id(),
            theme: ThemeName::default(),
            dashboard: DashboardSettings::default(),
            countries: CountrySettings::default(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn scope(&self) -> UserScope {
        UserScope::new(&self.app_id, &self.user_id)
    }

    pub fn catalog(&self) -> CountryCatalog {
        CountryCatalog::new(self.countries.other_scope)
    }

    /// Change one setting. Hyphenated keys are accepted; `panels` takes a
    /// comma separated list. Nothing changes when the new value is invalid.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.clone();
        let value = value.trim();

        match key.replace('-', "_").as_str() {
            "theme" => next.theme = value.parse()?,
            "user_id" => next.user_id = value.to_string(),
            "top_n" => {
                next.dashboard.top_n = value.parse().map_err(|_| {
                    Error::Config(format!("top_n must be a whole number: {:?}", value))
                })?
            }
            "panels" => {
                next.dashboard.panels = value
                    .split(',')
                    .map(str::parse::<Panel>)
                    .collect::<std::result::Result<_, _>>()
                    .map_err(Error::Config)?
            }
            "other_scope" => next.countries.other_scope = value.parse().map_err(Error::Config)?,
            other => {
                return Err(Error::Config(format!(
                    "unknown setting '{}': expected one of {}",
                    other,
                    SETTING_KEYS.join(", ")
                )));
            }
        }

        next.validate()?;
        *self = next;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        for (key, value) in [("app_id", &self.app_id), ("user_id", &self.user_id)] {
            if value.trim().is_empty() || value.contains('/') {
                return Err(Error::Config(format!(
                    "{} must be non-empty and must not contain '/': {:?}",
                    key, value
                )));
            }
        }
        if self.dashboard.top_n == 0 {
            return Err(Error::Config("dashboard.top_n must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use humidor_engine::Panel;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.app_id, "humidor-hub");
        assert_eq!(config.theme, ThemeName::Classic);
        assert_eq!(config.dashboard.top_n, 5);
        assert_eq!(config.countries.other_scope, OtherCountryScope::Featured);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.theme = ThemeName::Midnight;
        config.dashboard.panels = vec![Panel::Humidors, Panel::TopBrands];
        config.countries.other_scope = OtherCountryScope::Catalog;

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(
            &config_path,
            "theme = \"plain\"\n\n[countries]\nother_scope = \"catalog\"\n",
        )?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.theme, ThemeName::Plain);
        assert_eq!(config.user_id, "local");
        assert_eq!(config.catalog().scope(), OtherCountryScope::Catalog);
        assert_eq!(config.dashboard, DashboardSettings::default());
        Ok(())
    }

    #[test]
    fn test_invalid_values_are_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join(CONFIG_FILE);

        std::fs::write(&config_path, "user_id = \"a/b\"\n")?;
        assert!(matches!(Config::load_from(&config_path), Err(Error::Config(_))));

        std::fs::write(&config_path, "[dashboard]\npanels = [\"pie\"]\n")?;
        assert!(matches!(Config::load_from(&config_path), Err(Error::Config(_))));
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_set_updates_one_setting() -> Result<()> {
        let mut config = Config::default();
        config.set("top-n", "3")?;
        config.set("panels", "humidors, top_brands")?;
        config.set("other_scope", "catalog")?;

        assert_eq!(config.dashboard.top_n, 3);
        assert_eq!(config.dashboard.panels, vec![Panel::Humidors, Panel::TopBrands]);
        assert_eq!(config.countries.other_scope, OtherCountryScope::Catalog);
        Ok(())
    }

    #[test]
    fn test_set_rejects_bad_values_without_changes() {
        let mut config = Config::default();
        assert!(matches!(config.set("top_n", "0"), Err(Error::Config(_))));
        assert!(matches!(config.set("user_id", "a/b"), Err(Error::Config(_))));
        assert!(matches!(config.set("panels", "pie"), Err(Error::Config(_))));
        assert!(matches!(config.set("colour", "red"), Err(Error::Config(_))));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("Midnight".parse::<ThemeName>().ok(), Some(ThemeName::Midnight));
        assert!("neon".parse::<ThemeName>().is_err());
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        assert_eq!(
            resolve_workspace_path(Some("/tmp/humidor-data"))?,
            PathBuf::from("/tmp/humidor-data")
        );
        Ok(())
    }
}
