use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use tracing::{debug, info};

use super::{Biomarker, BiomarkerCatalog, CatalogError, Indication};

const NAME_ALIASES: &[&str] = &["biomarker_name", "Serum Protein Biomarker"];
const CATEGORY_ALIASES: &[&str] = &["category", "Category"];
const INDICATION_ALIASES: &[&str] = &["indication", "Indication"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Csv,
    Tsv,
    GzippedCsv,
    GzippedTsv,
}

impl FileFormat {
    fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let ext = path.extension().and_then(|e| e.to_str());
        let stem = path.file_stem().and_then(|s| s.to_str());
        match (ext, stem) {
            (Some("gz"), Some(stem)) => {
                if stem.ends_with(".csv") {
                    Ok(FileFormat::GzippedCsv)
                } else if stem.ends_with(".tsv") || stem.ends_with(".txt") {
                    Ok(FileFormat::GzippedTsv)
                } else {
                    Err(CatalogError::UnsupportedFormat(path.display().to_string()))
                }
            }
            (Some("csv"), _) => Ok(FileFormat::Csv),
            (Some("tsv"), _) | (Some("txt"), _) => Ok(FileFormat::Tsv),
            _ => Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        }
    }

    fn delimiter(&self) -> u8 {
        match self {
            FileFormat::Csv | FileFormat::GzippedCsv => b',',
            FileFormat::Tsv | FileFormat::GzippedTsv => b'\t',
        }
    }

    fn is_gzipped(&self) -> bool {
        matches!(self, FileFormat::GzippedCsv | FileFormat::GzippedTsv)
    }
}

/// Loads a biomarker catalog from a CSV or TSV file, gzipped or plain.
///
/// Exported spreadsheets often repeat the header line between category
/// sections; such artifact rows are skipped before validation. Every
/// surviving record must carry a non-empty name, category and indication,
/// the indication must be an arrow symbol or the — placeholder, and names
/// must be unique.
pub fn load_catalog(path: &Path) -> Result<BiomarkerCatalog, CatalogError> {
    info!("loading biomarker catalog from {}", path.display());
    let format = FileFormat::from_path(path)?;
    debug!("detected catalog format {:?}", format);

    let file = File::open(path)?;
    let entries = if format.is_gzipped() {
        parse_entries(BufReader::new(GzDecoder::new(file)), format.delimiter())?
    } else {
        parse_entries(BufReader::new(file), format.delimiter())?
    };
    info!("loaded {} biomarkers", entries.len());
    Ok(BiomarkerCatalog::from_entries(entries))
}

fn parse_entries<R: Read>(reader: R, delimiter: u8) -> Result<Vec<Biomarker>, CatalogError> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    // The first header cell may carry a BOM from spreadsheet exports.
    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    let name_idx = find_column(&headers, NAME_ALIASES);
    let category_idx = find_column(&headers, CATEGORY_ALIASES);
    let indication_idx = find_column(&headers, INDICATION_ALIASES);

    let missing: Vec<&str> = [
        ("biomarker_name", name_idx),
        ("category", category_idx),
        ("indication", indication_idx),
    ]
    .iter()
    .filter(|(_, idx)| idx.is_none())
    .map(|(name, _)| *name)
    .collect();
    let (Some(name_idx), Some(category_idx), Some(indication_idx)) =
        (name_idx, category_idx, indication_idx)
    else {
        return Err(CatalogError::MissingColumns(missing.join(", ")));
    };

    let mut entries = Vec::new();
    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut skipped = 0usize;

    for (idx, result) in csv_reader.records().enumerate() {
        let record = result?;
        let line = idx + 2;
        let name = record.get(name_idx).unwrap_or("");
        let category = record.get(category_idx).unwrap_or("");
        let indication_raw = record.get(indication_idx).unwrap_or("");

        // Embedded header repeats between category sections.
        if name.contains("Biomarker") || indication_raw == "Indication" {
            skipped += 1;
            continue;
        }

        for (column, value) in [
            ("biomarker_name", name),
            ("category", category),
            ("indication", indication_raw),
        ] {
            if value.is_empty() {
                return Err(CatalogError::EmptyValue {
                    row: line,
                    column: column.to_string(),
                });
            }
        }

        let indication = Indication::from_symbol(indication_raw);
        if indication == Indication::Unvalidated && indication_raw != "—" {
            return Err(CatalogError::InvalidIndication(name.to_string()));
        }
        if !seen.insert(name.to_string()) {
            return Err(CatalogError::DuplicateName(name.to_string()));
        }

        entries.push(Biomarker {
            name: name.to_string(),
            category: category.to_string(),
            indication,
        });
    }

    if skipped > 0 {
        debug!("skipped {} header artifact rows", skipped);
    }
    Ok(entries)
}

fn find_column(headers: &[String], aliases: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| aliases.iter().any(|alias| h == alias))
}
