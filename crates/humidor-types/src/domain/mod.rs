pub mod cigar;
pub mod humidor;
pub mod ids;
pub mod journal;
pub mod path;
pub mod rating;
pub mod strength;

pub use cigar::*;
pub use humidor::*;
pub use ids::*;
pub use journal::*;
pub use path::*;
pub use rating::*;
pub use strength::*;
