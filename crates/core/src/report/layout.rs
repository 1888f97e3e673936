//! Document layout composition.
//!
//! `compose` turns an aggregated report into the fixed block sequence of
//! the printed inspection report. It is a pure function of its inputs:
//! equal `(report, responsible, timestamp, logo)` always yields an equal
//! block sequence. The PDF backend consumes the sequence afterwards.

use chrono::{DateTime, Local};

use super::types::{AggregatedReport, Category};
use crate::assets::LogoImage;

/// Organization name, first title line.
pub const ORGANIZATION_NAME: &str = "ABACO DOMPORQUITO S/A";
/// Report title, second title line.
pub const REPORT_TITLE: &str = "RELATORIO DE CONTAGEM";
/// Section heading above the count layout.
pub const COUNT_HEADING: &str = "CONTAGEM:";

/// Vertical gap before the signature block, in points.
const SIGNATURE_GAP_PT: u32 = 60;

/// One unit of document content in the composed output sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Best-effort letterhead logo, centered.
    Logo(LogoImage),
    /// Centered bold heading line.
    Title(String),
    /// Right-aligned date/time line.
    DateLine(String),
    /// Left-aligned bold section heading.
    SectionHeading(String),
    /// Two columns of stacked lines rendered side by side.
    Columns {
        /// Left column content, top to bottom.
        left: Vec<ColumnLine>,
        /// Right column content, top to bottom.
        right: Vec<ColumnLine>,
    },
    /// Centered bold grand-total line. Always present.
    GrandTotal(String),
    /// Fixed vertical gap, in points.
    Gap(u32),
    /// Signature block: a horizontal rule and the responsible-party
    /// name, both centered bold.
    Signature(String),
}

/// One line inside a column cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnLine {
    /// Category heading with its display subtotal.
    Heading(String),
    /// One sub-item line, `Name: value`.
    Item(String),
    /// Vertical spacer between categories sharing a column.
    Gap,
}

/// Compose the ordered block sequence for one report.
///
/// The timestamp is captured once by the caller at the start of
/// composition and used for the date line; the filename derives from the
/// same instant.
#[must_use]
pub fn compose(
    report: &AggregatedReport,
    responsible: &str,
    timestamp: DateTime<Local>,
    logo: Option<LogoImage>,
) -> Vec<Block> {
    let mut blocks = Vec::new();

    if let Some(logo) = logo {
        blocks.push(Block::Logo(logo));
    }

    blocks.push(Block::Title(ORGANIZATION_NAME.to_string()));
    blocks.push(Block::Title(REPORT_TITLE.to_string()));
    blocks.push(Block::DateLine(format!(
        "DATA E HORA: {}",
        timestamp.format("%d/%m/%Y, %H:%M:%S")
    )));
    blocks.push(Block::SectionHeading(COUNT_HEADING.to_string()));

    if let Some(top_row) = compose_top_row(report) {
        blocks.push(top_row);
    }
    if let Some(grid) = compose_grid(report) {
        blocks.push(grid);
    }

    blocks.push(Block::GrandTotal(format!(
        "TOTAL GERAL: {} ITENS",
        report.grand_total()
    )));
    blocks.push(Block::Gap(SIGNATURE_GAP_PT));
    blocks.push(Block::Signature(responsible.to_string()));

    blocks
}

/// Section heading line, `NAME (TOTAL: n)`.
fn section_heading(report: &AggregatedReport, category: Category) -> ColumnLine {
    ColumnLine::Heading(format!(
        "{} (TOTAL: {})",
        category.display_name(),
        report.subtotal(category)
    ))
}

/// The top row holds the two single-line categories, filled left to
/// right in fixed order. Omitted entirely when both are empty.
fn compose_top_row(report: &AggregatedReport) -> Option<Block> {
    let mut cells = [Category::CarcassNonconforming, Category::FootNonconforming]
        .into_iter()
        .filter(|category| !report.is_empty(*category))
        .map(|category| vec![section_heading(report, category)]);

    let left = cells.next()?;
    let right = cells.next().unwrap_or_default();
    Some(Block::Columns { left, right })
}

/// The main grid interleaves the four partitioned categories across two
/// columns by position index (0,2 left; 1,3 right). Omitted when both
/// columns end up empty.
fn compose_grid(report: &AggregatedReport) -> Option<Block> {
    let mut columns: [Vec<ColumnLine>; 2] = [Vec::new(), Vec::new()];

    for (position, category) in Category::PARTITIONED.into_iter().enumerate() {
        if report.is_empty(category) {
            continue;
        }
        let column = &mut columns[position % 2];
        if !column.is_empty() {
            column.push(ColumnLine::Gap);
        }
        column.push(section_heading(report, category));
        for (item, value) in report.items(category) {
            column.push(ColumnLine::Item(format!("{item}: {value}")));
        }
    }

    let [left, right] = columns;
    if left.is_empty() && right.is_empty() {
        return None;
    }
    Some(Block::Columns { left, right })
}
