pub mod client;
pub mod config;
pub mod error;
pub mod init;
pub mod ops;

pub use client::{
    CigarFields, CigarOps, DashboardOps, HumidorFields, HumidorHub, HumidorOps, JournalOps,
    NewEntry, TransferOps,
};
pub use config::{
    CONFIG_FILE, Config, CountrySettings, DATABASE_FILE, SETTING_KEYS, ThemeName,
    resolve_workspace_path,
};
pub use error::{Error, Result};
pub use init::{ConfigStatus, InitConfig, InitResult, InitService};
pub use ops::{
    BrowseResult, CigarDetail, CollectionDocument, ExportFormat, HumidorDetail, ImportOptions,
    ImportReport, QuantityChange, RemovedHumidor, SavedCigar, SkippedRecord,
};
