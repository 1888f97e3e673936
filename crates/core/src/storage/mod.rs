//! Artifact storage using Apache OpenDAL.
//!
//! Rendered reports are written to, and the optional logo asset is read
//! from, a vendor-agnostic store:
//! - Local filesystem (plant-floor deployments, the default)
//! - S3-compatible: Cloudflare R2, Supabase Storage, AWS S3

mod config;
mod error;
mod service;

pub use config::StorageProvider;
pub use error::StorageError;
pub use service::ArtifactStore;
