// Presenters turn runtime results into view models.
// They decide badges and suggestions; they never format numbers or dates.

mod cigar;
mod dashboard;
mod humidor;
mod journal;
mod system;
mod transfer;

pub use cigar::*;
pub use dashboard::*;
pub use humidor::*;
pub use journal::*;
pub use system::*;
pub use transfer::*;
