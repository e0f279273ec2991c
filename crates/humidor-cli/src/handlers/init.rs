use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::types::OutputFormat;
use anyhow::Result;
use humidor_runtime::{HumidorHub, InitConfig};
use std::path::Path;

pub fn handle(data_dir: &Path, user_id: Option<String>, format: OutputFormat) -> Result<()> {
    let result = HumidorHub::setup(InitConfig {
        data_dir: data_dir.to_path_buf(),
        user_id,
    })?;

    let ctx = HandlerContext::new(format, result.config.theme);
    ctx.render(presenters::present_init(result))
}
