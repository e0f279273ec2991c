use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::types::FileFormat;
use anyhow::{Context, Result};
use humidor_runtime::{ExportFormat, HumidorHub, ImportOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Without an output path the document itself goes to stdout, whatever `--format` says.
pub fn export(
    hub: &HumidorHub,
    format: FileFormat,
    output: Option<PathBuf>,
    ctx: &HandlerContext,
) -> Result<()> {
    let format: ExportFormat = format.into();

    match output {
        Some(path) => {
            let records = hub
                .transfer()
                .export_file(format, &path)
                .with_context(|| format!("Failed to export to {}", path.display()))?;
            ctx.render(presenters::present_export(format, &path, records))
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            hub.transfer().export_to(format, &mut handle)?;
            handle.flush()?;
            Ok(())
        }
    }
}

pub fn import(hub: &HumidorHub, file: &Path, replace: bool, ctx: &HandlerContext) -> Result<()> {
    let report = hub
        .transfer()
        .import_file(file, ImportOptions { replace })
        .with_context(|| format!("Failed to import {}", file.display()))?;

    if !report.skipped.is_empty() {
        tracing::warn!(skipped = report.skipped.len(), "some records were not imported");
    }

    ctx.render(presenters::present_import(report, file, replace))
}
