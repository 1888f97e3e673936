//! Tally classification and aggregation.

use super::types::{AggregatedReport, Category, Tally};

/// Aggregate a raw tally list into per-category maps and the grand total.
///
/// Tallies are processed in input order. Every value is added to the
/// grand total; only classified tallies also land in a category map,
/// where duplicate `(category, sub-item)` keys are last-write-wins. This
/// mirrors the printed report's established behavior and is preserved
/// deliberately.
#[must_use]
pub fn aggregate(tallies: &[Tally]) -> AggregatedReport {
    let mut report = AggregatedReport::default();

    for tally in tallies {
        report.add_value(tally.value);
        if let Some((category, key)) = Category::classify(&tally.label) {
            report.insert(category, key, tally.value);
        }
    }

    report
}
