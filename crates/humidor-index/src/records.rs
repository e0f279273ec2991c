use serde::Serialize;

/// Row counts for one user scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StoreStats {
    pub humidors: usize,
    pub cigars: usize,
    pub journal_entries: usize,
    /// Sum of cigar quantities.
    pub total_quantity: u64,
}

/// Rows written by a bulk import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ImportCounts {
    pub humidors: usize,
    pub cigars: usize,
    pub journal_entries: usize,
}
