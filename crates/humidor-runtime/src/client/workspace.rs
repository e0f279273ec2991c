use crate::client::{CigarOps, DashboardOps, HumidorOps, JournalOps, TransferOps};
use crate::config::{CONFIG_FILE, Config, DATABASE_FILE};
use crate::init::{InitConfig, InitResult, InitService};
use crate::Result;
use humidor_index::{Database, StoreStats};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Entry point for everything that reads or writes a collection.
pub struct HumidorHub {
    db: Arc<Database>,
    data_dir: PathBuf,
    config: Arc<Config>,
}

impl HumidorHub {
    pub fn setup(config: InitConfig) -> Result<InitResult> {
        InitService::run(config)
    }

    pub fn open(data_dir: PathBuf) -> Result<Self> {
        let config = Config::load_from(&data_dir.join(CONFIG_FILE))?;
        std::fs::create_dir_all(&data_dir)?;
        let db = Database::open(&data_dir.join(DATABASE_FILE), config.scope())?;

        tracing::debug!(
            data_dir = %data_dir.display(),
            user_id = %config.user_id,
            "collection opened"
        );

        #[allow(clippy::arc_with_non_send_sync)]
        let db = Arc::new(db);
        Ok(Self {
            db,
            data_dir,
            config: Arc::new(config),
        })
    }

    /// In-memory collection; nothing is written to disk.
    pub fn open_in_memory(config: Config) -> Result<Self> {
        let db = Database::open_in_memory(config.scope())?;

        #[allow(clippy::arc_with_non_send_sync)]
        let db = Arc::new(db);
        Ok(Self {
            db,
            data_dir: PathBuf::new(),
            config: Arc::new(config),
        })
    }

    pub fn humidors(&self) -> HumidorOps {
        HumidorOps::new(self.db.clone())
    }

    pub fn cigars(&self) -> CigarOps {
        CigarOps::new(self.db.clone(), self.config.clone())
    }

    pub fn journal(&self) -> JournalOps {
        JournalOps::new(self.db.clone())
    }

    /// Loads the collection once; panels are cached until it changes.
    pub fn dashboard(&self) -> Result<DashboardOps> {
        DashboardOps::load(self.db.clone(), self.config.clone())
    }

    pub fn transfer(&self) -> TransferOps {
        TransferOps::new(self.db.clone())
    }

    pub fn stats(&self) -> Result<StoreStats> {
        Ok(self.db.stats()?)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
