mod cigars;
mod dashboard;
mod humidors;
mod journal;
mod transfer;
mod workspace;

pub use cigars::{CigarFields, CigarOps};
pub use dashboard::DashboardOps;
pub use humidors::{HumidorFields, HumidorOps};
pub use journal::{JournalOps, NewEntry};
pub use transfer::TransferOps;
pub use workspace::HumidorHub;
