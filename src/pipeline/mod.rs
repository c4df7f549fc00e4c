//! Pipeline module - loading, filtering, categorizing and summarizing cohorts

pub mod aggregate;
pub mod category;
pub mod cohort;
pub mod complete;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod record;
pub mod stats;

pub use aggregate::*;
pub use category::*;
pub use cohort::*;
pub use complete::*;
pub use config::*;
pub use error::*;
pub use filter::*;
pub use loader::*;
pub use record::*;
pub use stats::*;
