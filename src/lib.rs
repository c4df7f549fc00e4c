//! cohort-lens: BMI Cohort Analysis Library
//!
//! Filters a screening dataset for physiologically valid records, assigns
//! each record a BMI cohort and summarizes every cohort, including the ones
//! no record fell into.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
