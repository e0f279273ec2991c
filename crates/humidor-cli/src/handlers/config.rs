use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::types::OutputFormat;
use anyhow::Result;
use humidor_runtime::{CONFIG_FILE, Config};
use std::path::Path;

pub fn show(data_dir: &Path, format: OutputFormat) -> Result<()> {
    let config_path = data_dir.join(CONFIG_FILE);
    let config = Config::load_from(&config_path)?;

    let ctx = HandlerContext::new(format, config.theme);
    ctx.render(presenters::present_config(&config, &config_path))
}

pub fn set(data_dir: &Path, key: &str, value: &str, format: OutputFormat) -> Result<()> {
    let config_path = data_dir.join(CONFIG_FILE);
    let mut config = Config::load_from(&config_path)?;

    config.set(key, value)?;
    config.save_to(&config_path)?;
    tracing::info!(key, value, "setting saved");

    let ctx = HandlerContext::new(format, config.theme);
    ctx.render(presenters::present_config_updated(&config, &config_path, key))
}
