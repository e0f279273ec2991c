use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ExportViewModel {
    pub format: String,
    pub path: String,
    pub records: usize,
}

#[derive(Debug, Serialize)]
pub struct SkippedRecordViewModel {
    pub collection: String,
    /// Zero-based index in the source array.
    pub position: usize,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct ImportViewModel {
    pub source: String,
    pub replace: bool,
    pub humidors: usize,
    pub cigars: usize,
    pub journal_entries: usize,
    pub skipped: Vec<SkippedRecordViewModel>,
}
