//! Count report composition.
//!
//! This module provides pure business logic for turning a flat list of
//! labeled tallies into a printable inspection report:
//! - Classification of tallies into the six fixed report categories
//! - Aggregation into per-category maps and the grand total
//! - Layout composition into an ordered block sequence
//! - Orchestration of a full request (aggregate, compose, render, store)

pub mod aggregate;
pub mod error;
pub mod layout;
pub mod service;
pub mod types;


pub use aggregate::aggregate;
pub use error::ReportError;
pub use layout::{Block, ColumnLine, compose};
pub use service::{GeneratedReport, ReportGenerator};
pub use types::*;
