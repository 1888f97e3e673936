//! Core business logic for Abaco.
//!
//! This crate contains the report composition engine with ZERO web
//! dependencies. A request flows one way through it:
//!
//! ```text
//! tallies -> AggregatedReport -> Vec<Block> -> PDF bytes -> artifact
//! ```
//!
//! # Modules
//!
//! - `report` - Tally classification, aggregation, and document layout
//! - `render` - PDF backend turning a block sequence into A4 pages
//! - `assets` - Optional logo loading with explicit fallback
//! - `storage` - Vendor-agnostic artifact store over Apache OpenDAL

pub mod assets;
pub mod render;
pub mod report;
pub mod storage;
