//! Report data types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Placeholder rendered in the signature block when no responsible party
/// was informed.
pub const DEFAULT_RESPONSIBLE: &str = "Não informado";

/// One labeled count submitted by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Free-text label; certain tokens and the `" - "` separator carry
    /// classification meaning.
    pub label: String,
    /// Counted quantity.
    pub value: u64,
}

/// A full report request as submitted over the wire.
///
/// A missing `counts` field, a non-list `counts`, or a tally with a
/// missing or non-numeric `value` fails deserialization and therefore
/// the whole request, before any document work starts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportRequest {
    /// The raw, unordered tally list.
    pub counts: Vec<Tally>,
    /// Responsible-party name for the signature block.
    #[serde(default)]
    pub responsible: Option<String>,
}

impl ReportRequest {
    /// The responsible-party name, or the default placeholder when the
    /// field is absent, empty, or whitespace-only.
    #[must_use]
    pub fn responsible_or_default(&self) -> &str {
        self.responsible
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_RESPONSIBLE)
    }
}

/// One of the six fixed groupings under which tallies are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Nonconforming carcasses, keyed by full label.
    CarcassNonconforming,
    /// Nonconforming feet, keyed by full label.
    FootNonconforming,
    /// Ham cuts ("PERNIL").
    Ham,
    /// Shoulder cuts ("PALETA").
    Shoulder,
    /// Loin cuts ("CARRÉ").
    Loin,
    /// Belly cuts ("BARRIGA").
    Belly,
}

/// Label token marking a carcass tally. Checked before everything else,
/// so a carcass label is never split on the separator.
const CARCASS_TOKEN: &str = "CARCAÇA";
/// Label token marking a foot tally.
const FOOT_TOKEN: &str = "PÉ";
/// Separator between a category token and its sub-item.
const GROUP_SEPARATOR: &str = " - ";

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 6;

    /// All categories in display order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::CarcassNonconforming,
        Self::FootNonconforming,
        Self::Ham,
        Self::Shoulder,
        Self::Loin,
        Self::Belly,
    ];

    /// The four categories laid out in the two-column grid, in their
    /// fixed display order.
    pub const PARTITIONED: [Self; 4] = [Self::Ham, Self::Shoulder, Self::Loin, Self::Belly];

    /// Display name used in section headings, matching the printed report.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::CarcassNonconforming => "CARCAÇA NÃO CONFORME",
            Self::FootNonconforming => "PÉ NÃO CONFORME",
            Self::Ham => "PERNIL",
            Self::Shoulder => "PALETA",
            Self::Loin => "CARRÉ",
            Self::Belly => "BARRIGA",
        }
    }

    /// Position in [`Category::ALL`], used for section indexing.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::CarcassNonconforming => 0,
            Self::FootNonconforming => 1,
            Self::Ham => 2,
            Self::Shoulder => 3,
            Self::Loin => 4,
            Self::Belly => 5,
        }
    }

    /// Resolve a partitioned category from the token left of the
    /// separator.
    #[must_use]
    pub fn from_group_token(token: &str) -> Option<Self> {
        Self::PARTITIONED
            .into_iter()
            .find(|category| category.display_name() == token)
    }

    /// Classify a tally label into a category and the sub-item key it is
    /// stored under, or `None` when the label matches nothing.
    ///
    /// The carcass and foot tokens win over the separator rule, and keep
    /// the full label verbatim as the key. Partitioned labels split on
    /// the first `" - "` and capitalize the sub-item's first character
    /// (ASCII-only, rest unchanged).
    #[must_use]
    pub fn classify(label: &str) -> Option<(Self, String)> {
        if label.contains(CARCASS_TOKEN) {
            return Some((Self::CarcassNonconforming, label.to_string()));
        }
        if label.contains(FOOT_TOKEN) {
            return Some((Self::FootNonconforming, label.to_string()));
        }
        let (token, sub_item) = label.split_once(GROUP_SEPARATOR)?;
        let category = Self::from_group_token(token)?;
        Some((category, capitalize_first(sub_item)))
    }
}

/// Uppercase the first character (ASCII-only), leaving the rest unchanged.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// The aggregated form of one request: six sub-item maps plus the grand
/// total.
///
/// The grand total counts every submitted value, including tallies that
/// matched no category and every occurrence of a duplicate key, so it can
/// legitimately differ from the sum of the per-category subtotals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedReport {
    grand_total: u64,
    sections: [BTreeMap<String, u64>; Category::COUNT],
}

impl AggregatedReport {
    /// Sum of all submitted values, independent of classification,
    /// saturating at `u64::MAX`.
    #[must_use]
    pub const fn grand_total(&self) -> u64 {
        self.grand_total
    }

    /// Sub-item map of one category, in deterministic key order.
    #[must_use]
    pub fn items(&self, category: Category) -> &BTreeMap<String, u64> {
        &self.sections[category.index()]
    }

    /// Display subtotal of one category, computed from the values
    /// currently in its map (after any overwrites).
    #[must_use]
    pub fn subtotal(&self, category: Category) -> u64 {
        self.sections[category.index()].values().sum()
    }

    /// Whether a category holds no sub-items.
    #[must_use]
    pub fn is_empty(&self, category: Category) -> bool {
        self.sections[category.index()].is_empty()
    }

    /// Count a submitted value toward the grand total. Saturates at
    /// `u64::MAX` so absurd inputs cannot wrap the printed total around
    /// zero.
    pub(crate) fn add_value(&mut self, value: u64) {
        self.grand_total = self.grand_total.saturating_add(value);
    }

    /// Store a value under a category slot. Last write wins on duplicate
    /// keys; earlier values stay counted in the grand total.
    pub(crate) fn insert(&mut self, category: Category, key: String, value: u64) {
        self.sections[category.index()].insert(key, value);
    }
}
