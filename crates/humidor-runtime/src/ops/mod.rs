pub mod cigar;
pub mod humidor;
pub mod transfer;

pub use cigar::{BrowseResult, CigarDetail, CigarService, QuantityChange, SavedCigar};
pub use humidor::{HumidorDetail, HumidorService, RemovedHumidor};
pub use transfer::{
    CollectionDocument, ExportFormat, ImportOptions, ImportReport, SkippedRecord, TransferService,
};
