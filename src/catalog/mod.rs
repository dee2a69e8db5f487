use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

pub mod defs;
pub mod load;

pub use defs::builtin_catalog;
pub use load::load_catalog;

/// Regulation direction of a serum biomarker in PDAC, parsed from the raw
/// indication symbol by substring detection (see [`Indication::from_symbol`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Indication {
    Oncogenic,
    Suppressor,
    Both,
    Unvalidated,
}

impl Indication {
    /// ↑ means oncogenic, ↓ means suppressor, both arrows mean dual-role.
    /// A symbol with neither arrow (the catalog uses the `—` placeholder)
    /// is Unvalidated.
    pub fn from_symbol(raw: &str) -> Self {
        let up = raw.contains('↑');
        let down = raw.contains('↓');
        match (up, down) {
            (true, true) => Indication::Both,
            (true, false) => Indication::Oncogenic,
            (false, true) => Indication::Suppressor,
            (false, false) => Indication::Unvalidated,
        }
    }

    pub fn is_oncogenic(&self) -> bool {
        matches!(self, Indication::Oncogenic | Indication::Both)
    }

    pub fn is_suppressor(&self) -> bool {
        matches!(self, Indication::Suppressor | Indication::Both)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Indication::Oncogenic => "↑",
            Indication::Suppressor => "↓",
            Indication::Both => "↑/↓",
            Indication::Unvalidated => "—",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Biomarker {
    pub name: String,
    pub category: String,
    pub indication: Indication,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    pub total_biomarkers: usize,
    pub categories: Vec<String>,
    pub category_counts: BTreeMap<String, usize>,
    pub oncogenic_count: usize,
    pub suppressor_count: usize,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Csv(#[from] csv::Error),

    #[error("unsupported catalog file format '{0}' (expected .csv, .tsv or a .gz of either)")]
    UnsupportedFormat(String),

    #[error("missing required columns: {0}")]
    MissingColumns(String),

    #[error("record {row}: empty value in required column '{column}'")]
    EmptyValue { row: usize, column: String },

    #[error("biomarker '{0}': indication must contain ↑ (oncogenic) or ↓ (suppressor) symbols")]
    InvalidIndication(String),

    #[error("duplicate biomarker name '{0}'")]
    DuplicateName(String),
}

/// Read-only reference table of PDAC serum biomarkers.
///
/// Lookup is case-sensitive; iteration follows lexicographic name order so
/// every consumer sees the same sequence regardless of load order.
#[derive(Debug, Clone)]
pub struct BiomarkerCatalog {
    entries: BTreeMap<String, Biomarker>,
}

impl BiomarkerCatalog {
    /// Builds a catalog from already-validated entries. On a repeated name
    /// the later entry wins; loaders reject duplicates before reaching here.
    pub fn from_entries(entries: Vec<Biomarker>) -> Self {
        let mut map = BTreeMap::new();
        for entry in entries {
            map.insert(entry.name.clone(), entry);
        }
        Self { entries: map }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Biomarker> {
        self.entries.get(name)
    }

    pub fn indication(&self, name: &str) -> Option<Indication> {
        self.entries.get(name).map(|b| b.indication)
    }

    pub fn biomarkers(&self) -> impl Iterator<Item = &Biomarker> {
        self.entries.values()
    }

    /// Names with an oncogenic component, dual-role markers included.
    pub fn oncogenic_biomarkers(&self) -> Vec<&str> {
        self.entries
            .values()
            .filter(|b| b.indication.is_oncogenic())
            .map(|b| b.name.as_str())
            .collect()
    }

    /// Names marked suppressor only. Dual-role markers are excluded since
    /// they still behave as tumor antigens.
    pub fn suppressor_biomarkers(&self) -> Vec<&str> {
        self.entries
            .values()
            .filter(|b| b.indication == Indication::Suppressor)
            .map(|b| b.name.as_str())
            .collect()
    }

    /// Groups validated biomarkers by category for display. Unvalidated
    /// entries stay in the catalog and its stats but are left off the
    /// listing.
    pub fn categories_with_biomarkers(&self) -> BTreeMap<&str, Vec<&Biomarker>> {
        let mut grouped: BTreeMap<&str, Vec<&Biomarker>> = BTreeMap::new();
        for b in self.entries.values() {
            if b.indication == Indication::Unvalidated {
                continue;
            }
            grouped.entry(b.category.as_str()).or_default().push(b);
        }
        grouped
    }

    pub fn stats(&self) -> CatalogStats {
        let mut category_counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut oncogenic_count = 0;
        let mut suppressor_count = 0;
        for b in self.entries.values() {
            *category_counts.entry(b.category.clone()).or_insert(0) += 1;
            if b.indication.is_oncogenic() {
                oncogenic_count += 1;
            }
            if b.indication.is_suppressor() {
                suppressor_count += 1;
            }
        }
        CatalogStats {
            total_biomarkers: self.entries.len(),
            categories: category_counts.keys().cloned().collect(),
            category_counts,
            oncogenic_count,
            suppressor_count,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/catalog/tests.rs"]
mod tests;
