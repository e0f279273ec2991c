use crate::Result;
use crate::ops::{CollectionDocument, ExportFormat, ImportOptions, ImportReport, TransferService};
use humidor_index::Database;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

pub struct TransferOps {
    db: Arc<Database>,
}

impl TransferOps {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn document(&self) -> Result<CollectionDocument> {
        TransferService::new(&self.db).document()
    }

    pub fn export_to<W: Write>(&self, format: ExportFormat, writer: W) -> Result<usize> {
        TransferService::new(&self.db).export(format, writer)
    }

    pub fn export_file(&self, format: ExportFormat, path: &Path) -> Result<usize> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(path)?);
        let written = self.export_to(format, &mut writer)?;
        writer.flush()?;
        Ok(written)
    }

    pub fn import_file(&self, path: &Path, options: ImportOptions) -> Result<ImportReport> {
        let reader = BufReader::new(File::open(path)?);
        TransferService::new(&self.db).import(reader, options)
    }

    pub fn import_str(&self, input: &str, options: ImportOptions) -> Result<ImportReport> {
        TransferService::new(&self.db).import_str(input, options)
    }
}
