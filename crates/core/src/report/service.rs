//! Report request orchestration.

use std::sync::Arc;

use chrono::{DateTime, Local};
use tracing::info;

use super::aggregate::aggregate;
use super::error::ReportError;
use super::layout::compose;
use super::types::ReportRequest;
use crate::assets;
use crate::render::PdfRenderer;
use crate::storage::ArtifactStore;

/// The externally visible result of one generated report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedReport {
    /// Artifact name the report was written under.
    pub filename: String,
    /// Grand total printed on the report.
    pub grand_total: u64,
}

/// Runs one report request end to end: aggregate, compose, render, store.
///
/// Each request is processed independently and synchronously; no state is
/// shared across requests beyond the artifact store itself.
pub struct ReportGenerator {
    store: Arc<ArtifactStore>,
    logo_key: String,
}

impl ReportGenerator {
    /// Create a new generator writing to `store`, with the logo asset
    /// expected at `logo_key`.
    #[must_use]
    pub fn new(store: Arc<ArtifactStore>, logo_key: impl Into<String>) -> Self {
        Self {
            store,
            logo_key: logo_key.into(),
        }
    }

    /// Generate one report from a request.
    ///
    /// The timestamp is captured once at the start and feeds both the
    /// date line and the artifact name. A missing logo degrades
    /// gracefully; a render or storage failure aborts the request with
    /// no artifact.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or the artifact write fails.
    pub async fn generate(&self, request: &ReportRequest) -> Result<GeneratedReport, ReportError> {
        let timestamp = Local::now();

        let report = aggregate(&request.counts);
        let logo = assets::load_logo(&self.store, &self.logo_key).await;
        let blocks = compose(&report, request.responsible_or_default(), timestamp, logo);
        let bytes = PdfRenderer::render(&blocks)?;

        let filename = self.unique_report_name(timestamp).await;
        self.store.write_report(&filename, bytes).await?;
        info!(
            filename = %filename,
            grand_total = report.grand_total(),
            "report generated"
        );

        Ok(GeneratedReport {
            filename,
            grand_total: report.grand_total(),
        })
    }

    /// Timestamp-derived artifact name, strengthened with a monotonic
    /// suffix when another report already landed in the same second.
    async fn unique_report_name(&self, timestamp: DateTime<Local>) -> String {
        let base = timestamp.format("%Y-%m-%d_%H-%M-%S");
        let candidate = format!("report_{base}.pdf");
        if !self.store.exists(&candidate).await {
            return candidate;
        }

        let mut suffix: u32 = 2;
        loop {
            let candidate = format!("report_{base}_{suffix}.pdf");
            if !self.store.exists(&candidate).await {
                return candidate;
            }
            suffix += 1;
        }
    }
}
