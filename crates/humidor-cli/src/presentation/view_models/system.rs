use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConfigStatusViewModel {
    Created { config_path: String },
    LoadedExisting { config_path: String },
}

#[derive(Debug, Serialize)]
pub struct InitViewModel {
    pub config: ConfigStatusViewModel,
    pub db_path: String,
    pub app_id: String,
    pub user_id: String,
    pub humidors: usize,
    pub cigars: usize,
    pub journal_entries: usize,
}

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub config_path: String,
    pub app_id: String,
    pub user_id: String,
    pub theme: String,
    pub panels: Vec<String>,
    pub top_n: usize,
    pub other_scope: String,
}

#[derive(Debug, Serialize)]
pub struct StoreViewModel {
    pub data_dir: String,
    pub db_path: String,
    pub db_size_bytes: Option<u64>,
    pub schema_version: i32,
    pub humidors: usize,
    pub cigars: usize,
    pub journal_entries: usize,
    pub total_quantity: u64,
}
