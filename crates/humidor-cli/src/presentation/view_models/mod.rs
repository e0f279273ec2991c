pub mod cigar;
pub mod common;
pub mod dashboard;
pub mod humidor;
pub mod journal;
pub mod result;
pub mod system;
pub mod transfer;

pub use cigar::{
    CigarDetailViewModel, CigarListViewModel, CigarRemovedViewModel, CigarRowViewModel,
    CigarSavedViewModel, FilterViewModel, PuroViewModel, QuantityViewModel,
};
pub use common::{Guidance, SaveAction, StatusBadge, StatusLevel};
pub use dashboard::{
    BrowseViewModel, BucketRowViewModel, DashboardViewModel, PanelBodyViewModel, PanelViewModel,
    SummaryViewModel,
};
pub use humidor::{
    HumidorDetailViewModel, HumidorListViewModel, HumidorRemovedViewModel, HumidorRowViewModel,
    HumidorSavedViewModel,
};
pub use journal::{
    JournalDetailViewModel, JournalListViewModel, JournalRemovedViewModel, JournalRowViewModel,
    JournalSavedViewModel, JournalSummaryViewModel,
};
pub use result::CommandResultViewModel;
pub use system::{ConfigStatusViewModel, ConfigViewModel, InitViewModel, StoreViewModel};
pub use transfer::{ExportViewModel, ImportViewModel, SkippedRecordViewModel};

use crate::presentation::Palette;
use std::fmt;

/// Text rendering of a view model.
pub trait CreateView {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a>;
}
