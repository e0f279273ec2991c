use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, ExportViewModel, Guidance, ImportViewModel, SkippedRecordViewModel,
    StatusBadge,
};
use humidor_runtime::{ExportFormat, ImportReport};
use std::path::Path;

pub fn present_export(
    format: ExportFormat,
    path: &Path,
    records: usize,
) -> CommandResultViewModel<ExportViewModel> {
    let format = match format {
        ExportFormat::Json => "json",
        ExportFormat::Csv => "csv",
    };

    CommandResultViewModel::new(ExportViewModel {
        format: format.to_string(),
        path: path.display().to_string(),
        records,
    })
    .with_badge(StatusBadge::success(format!(
        "Exported {} record(s) to {}",
        records,
        path.display()
    )))
}

pub fn present_import(
    report: ImportReport,
    source: &Path,
    replace: bool,
) -> CommandResultViewModel<ImportViewModel> {
    let imported = report.counts.humidors + report.counts.cigars + report.counts.journal_entries;

    let content = ImportViewModel {
        source: source.display().to_string(),
        replace,
        humidors: report.counts.humidors,
        cigars: report.counts.cigars,
        journal_entries: report.counts.journal_entries,
        skipped: report
            .skipped
            .into_iter()
            .map(|record| SkippedRecordViewModel {
                collection: record.collection.to_string(),
                position: record.position,
                reason: record.reason,
            })
            .collect(),
    };

    let badge = if content.skipped.is_empty() {
        StatusBadge::success(format!("Imported {} record(s)", imported))
    } else {
        StatusBadge::warning(format!(
            "Imported {} record(s), skipped {}",
            imported,
            content.skipped.len()
        ))
    };

    CommandResultViewModel::new(content)
        .with_badge(badge)
        .with_suggestion(Guidance::new("See the collection").with_command(cmd::DASHBOARD))
        .with_suggestion(Guidance::new("Back it up again later").with_command(cmd::EXPORT))
}
