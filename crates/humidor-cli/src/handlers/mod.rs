mod context;

pub mod cigar;
pub mod config;
pub mod dashboard;
pub mod humidor;
pub mod init;
pub mod journal;
pub mod store;
pub mod transfer;

pub use context::HandlerContext;
