use crate::config::{CONFIG_FILE, Config, DATABASE_FILE};
use crate::Result;
use humidor_index::{Database, StoreStats};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigStatus {
    Created { config_path: PathBuf },
    LoadedExisting { config_path: PathBuf },
}

#[derive(Debug, Clone)]
pub struct InitResult {
    pub config_status: ConfigStatus,
    pub config: Config,
    pub db_path: PathBuf,
    pub stats: StoreStats,
}

#[derive(Debug, Clone, Default)]
pub struct InitConfig {
    pub data_dir: PathBuf,
    /// Owner of the collection; only used when a new config is written.
    pub user_id: Option<String>,
}

pub struct InitService;

impl InitService {
    pub fn run(config: InitConfig) -> Result<InitResult> {
        std::fs::create_dir_all(&config.data_dir)?;

        let config_path = config.data_dir.join(CONFIG_FILE);
        let db_path = config.data_dir.join(DATABASE_FILE);

        let (config_status, loaded) = Self::step1_config(&config_path, config.user_id)?;
        let stats = Self::step2_database(&db_path, &loaded)?;

        tracing::info!(
            data_dir = %config.data_dir.display(),
            cigars = stats.cigars,
            "workspace initialised"
        );

        Ok(InitResult {
            config_status,
            config: loaded,
            db_path,
            stats,
        })
    }

    fn step1_config(config_path: &Path, user_id: Option<String>) -> Result<(ConfigStatus, Config)> {
        if config_path.exists() {
            let config = Config::load_from(config_path)?;
            return Ok((
                ConfigStatus::LoadedExisting {
                    config_path: config_path.to_path_buf(),
                },
                config,
            ));
        }

        let mut config = Config::default();
        if let Some(user_id) = user_id {
            config.user_id = user_id;
        }
        config.save_to(config_path)?;
        // Reload so a bad user id is rejected before anything is stored
        let config = Config::load_from(config_path)?;

        Ok((
            ConfigStatus::Created {
                config_path: config_path.to_path_buf(),
            },
            config,
        ))
    }

    fn step2_database(db_path: &Path, config: &Config) -> Result<StoreStats> {
        let db = Database::open(db_path, config.scope())?;
        Ok(db.stats()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_first_run_creates_config_and_store() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let data_dir = temp_dir.path().join("hub");

        let result = InitService::run(InitConfig {
            data_dir: data_dir.clone(),
            user_id: Some("alex".to_string()),
        })?;

        assert!(matches!(result.config_status, ConfigStatus::Created { .. }));
        assert!(data_dir.join(CONFIG_FILE).exists());
        assert!(result.db_path.exists());
        assert_eq!(result.config.user_id, "alex");
        assert_eq!(result.stats, StoreStats::default());
        Ok(())
    }

    #[test]
    fn test_second_run_keeps_existing_config() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let data_dir = temp_dir.path().to_path_buf();

        InitService::run(InitConfig {
            data_dir: data_dir.clone(),
            user_id: Some("alex".to_string()),
        })?;
        let again = InitService::run(InitConfig {
            data_dir,
            user_id: Some("sam".to_string()),
        })?;

        assert!(matches!(again.config_status, ConfigStatus::LoadedExisting { .. }));
        assert_eq!(again.config.user_id, "alex");
        Ok(())
    }
}
