use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigStatusViewModel, ConfigViewModel, Guidance, InitViewModel,
    StatusBadge, StoreViewModel,
};
use humidor_index::{SCHEMA_VERSION, StoreStats};
use humidor_runtime::{Config, ConfigStatus, InitResult};
use std::path::Path;

pub fn present_init(result: InitResult) -> CommandResultViewModel<InitViewModel> {
    let (config, badge) = match result.config_status {
        ConfigStatus::Created { config_path } => (
            ConfigStatusViewModel::Created {
                config_path: config_path.display().to_string(),
            },
            StatusBadge::success("Workspace created"),
        ),
        ConfigStatus::LoadedExisting { config_path } => (
            ConfigStatusViewModel::LoadedExisting {
                config_path: config_path.display().to_string(),
            },
            StatusBadge::info("Workspace already set up"),
        ),
    };

    let content = InitViewModel {
        config,
        db_path: result.db_path.display().to_string(),
        app_id: result.config.app_id,
        user_id: result.config.user_id,
        humidors: result.stats.humidors,
        cigars: result.stats.cigars,
        journal_entries: result.stats.journal_entries,
    };

    let view = CommandResultViewModel::new(content).with_badge(badge);
    if result.stats.humidors == 0 {
        view.with_suggestion(Guidance::new("Create a humidor").with_command(cmd::HUMIDOR_ADD))
            .with_suggestion(Guidance::new("Or load an export").with_command(cmd::IMPORT))
    } else {
        view.with_suggestion(Guidance::new("See the collection").with_command(cmd::DASHBOARD))
    }
}

pub fn present_config(config: &Config, config_path: &Path) -> CommandResultViewModel<ConfigViewModel> {
    CommandResultViewModel::new(ConfigViewModel {
        config_path: config_path.display().to_string(),
        app_id: config.app_id.clone(),
        user_id: config.user_id.clone(),
        theme: config.theme.to_string(),
        panels: config.dashboard.panels.iter().map(|p| p.key().to_string()).collect(),
        top_n: config.dashboard.top_n,
        other_scope: config.countries.other_scope.to_string(),
    })
}

pub fn present_config_updated(
    config: &Config,
    config_path: &Path,
    key: &str,
) -> CommandResultViewModel<ConfigViewModel> {
    present_config(config, config_path)
        .with_badge(StatusBadge::success(format!("Saved {}", key)))
}

pub fn present_store(
    stats: StoreStats,
    data_dir: &Path,
    db_path: &Path,
    vacuumed: bool,
) -> CommandResultViewModel<StoreViewModel> {
    let content = StoreViewModel {
        data_dir: data_dir.display().to_string(),
        db_path: db_path.display().to_string(),
        db_size_bytes: std::fs::metadata(db_path).ok().map(|m| m.len()),
        schema_version: SCHEMA_VERSION,
        humidors: stats.humidors,
        cigars: stats.cigars,
        journal_entries: stats.journal_entries,
        total_quantity: stats.total_quantity,
    };

    let result = CommandResultViewModel::new(content);
    if vacuumed {
        result.with_badge(StatusBadge::success("Store compacted"))
    } else {
        result.with_suggestion(Guidance::new("Settings").with_command(cmd::CONFIG_SHOW))
    }
}
