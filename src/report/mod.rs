//! Report module - displaying, exporting and storing cohort results

pub mod export;
pub mod store;
pub mod summary;

pub use export::*;
pub use store::*;
pub use summary::*;
