use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

use super::*;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("immunogate_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

fn write_gz(path: &Path, contents: &str) {
    let file = File::create(path).unwrap();
    let mut enc = GzEncoder::new(file, Compression::default());
    enc.write_all(contents.as_bytes()).unwrap();
    enc.finish().unwrap();
}

#[test]
fn test_indication_from_symbol() {
    assert_eq!(Indication::from_symbol("↑"), Indication::Oncogenic);
    assert_eq!(Indication::from_symbol("↓"), Indication::Suppressor);
    assert_eq!(Indication::from_symbol("↑/↓"), Indication::Both);
    assert_eq!(Indication::from_symbol("—"), Indication::Unvalidated);
    assert_eq!(Indication::from_symbol(""), Indication::Unvalidated);
    assert_eq!(Indication::from_symbol("↑ (elevated)"), Indication::Oncogenic);
}

#[test]
fn test_indication_roles() {
    assert!(Indication::Oncogenic.is_oncogenic());
    assert!(!Indication::Oncogenic.is_suppressor());
    assert!(Indication::Both.is_oncogenic());
    assert!(Indication::Both.is_suppressor());
    assert!(Indication::Suppressor.is_suppressor());
    assert!(!Indication::Unvalidated.is_oncogenic());
    assert!(!Indication::Unvalidated.is_suppressor());
}

#[test]
fn test_builtin_catalog_contents() {
    let catalog = builtin_catalog();
    assert_eq!(catalog.len(), defs::BUILTIN_BIOMARKERS.len());

    assert_eq!(catalog.indication("MUC1"), Some(Indication::Oncogenic));
    assert_eq!(catalog.indication("CEA"), Some(Indication::Oncogenic));
    assert_eq!(catalog.indication("SMAD4"), Some(Indication::Suppressor));
    assert_eq!(catalog.indication("TGFB1"), Some(Indication::Both));
    assert_eq!(catalog.indication("CRP"), Some(Indication::Unvalidated));
    assert!(catalog.indication("NONEXISTENT").is_none());
    assert!(catalog.contains("CA 19-9"));
}

#[test]
fn test_builtin_names_are_unique() {
    let mut names: Vec<&str> = defs::BUILTIN_BIOMARKERS.iter().map(|d| d.name).collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn test_oncogenic_listing_includes_dual_role() {
    let catalog = builtin_catalog();
    let oncogenic = catalog.oncogenic_biomarkers();
    assert!(oncogenic.contains(&"MUC1"));
    assert!(oncogenic.contains(&"TGFB1"));
    assert!(!oncogenic.contains(&"SMAD4"));
    assert!(!oncogenic.contains(&"CRP"));
}

#[test]
fn test_suppressor_listing_excludes_dual_role() {
    let catalog = builtin_catalog();
    let suppressors = catalog.suppressor_biomarkers();
    assert!(suppressors.contains(&"SMAD4"));
    assert!(suppressors.contains(&"PTEN"));
    assert!(!suppressors.contains(&"TGFB1"));
    assert!(!suppressors.contains(&"MUC1"));
}

#[test]
fn test_category_grouping_skips_unvalidated() {
    let catalog = builtin_catalog();
    let grouped = catalog.categories_with_biomarkers();
    let mucins = grouped.get("Mucins").unwrap();
    assert_eq!(mucins.len(), 3);

    let inflammatory = grouped.get("Inflammatory markers").unwrap();
    assert!(inflammatory.iter().all(|b| b.name != "CRP"));
}

#[test]
fn test_builtin_stats() {
    let stats = builtin_catalog().stats();
    assert_eq!(stats.total_biomarkers, 24);
    assert_eq!(stats.categories.len(), 8);
    assert_eq!(stats.oncogenic_count, 19);
    assert_eq!(stats.suppressor_count, 6);
    assert_eq!(stats.category_counts.get("Mucins"), Some(&3));
    assert_eq!(stats.category_counts.get("Inflammatory markers"), Some(&3));
}

#[test]
fn test_load_csv_with_snake_case_headers() {
    let dir = make_temp_dir();
    let path = dir.join("markers.csv");
    write_file(
        &path,
        "biomarker_name,category,indication\n\
         MUC1,Mucins,↑\n\
         SMAD4,Tumor suppressors,↓\n",
    );

    let catalog = load_catalog(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.indication("MUC1"), Some(Indication::Oncogenic));
    assert_eq!(catalog.indication("SMAD4"), Some(Indication::Suppressor));
}

#[test]
fn test_load_csv_with_spreadsheet_headers_and_bom() {
    let dir = make_temp_dir();
    let path = dir.join("markers.csv");
    write_file(
        &path,
        "\u{feff}Serum Protein Biomarker,Category,Indication\n\
         CEA,Oncofetal antigens,↑\n\
         TGFB1,Growth factors,↑/↓\n",
    );

    let catalog = load_catalog(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.indication("CEA"), Some(Indication::Oncogenic));
    assert_eq!(catalog.indication("TGFB1"), Some(Indication::Both));
}

#[test]
fn test_load_skips_embedded_header_rows() {
    let dir = make_temp_dir();
    let path = dir.join("markers.csv");
    write_file(
        &path,
        "biomarker_name,category,indication\n\
         MUC1,Mucins,↑\n\
         Serum Protein Biomarker,Category,Indication\n\
         CEA,Oncofetal antigens,↑\n",
    );

    let catalog = load_catalog(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert!(catalog.contains("MUC1"));
    assert!(catalog.contains("CEA"));
}

#[test]
fn test_load_keeps_placeholder_indication_as_unvalidated() {
    let dir = make_temp_dir();
    let path = dir.join("markers.csv");
    write_file(
        &path,
        "biomarker_name,category,indication\n\
         CRP,Inflammatory markers,—\n",
    );

    let catalog = load_catalog(&path).unwrap();
    assert_eq!(catalog.indication("CRP"), Some(Indication::Unvalidated));
}

#[test]
fn test_load_rejects_missing_columns() {
    let dir = make_temp_dir();
    let path = dir.join("markers.csv");
    write_file(&path, "biomarker_name,category\nMUC1,Mucins\n");

    let err = load_catalog(&path).unwrap_err();
    match err {
        CatalogError::MissingColumns(cols) => assert!(cols.contains("indication")),
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}

#[test]
fn test_load_rejects_empty_values() {
    let dir = make_temp_dir();
    let path = dir.join("markers.csv");
    write_file(
        &path,
        "biomarker_name,category,indication\n\
         MUC1,,↑\n",
    );

    let err = load_catalog(&path).unwrap_err();
    match err {
        CatalogError::EmptyValue { row, column } => {
            assert_eq!(row, 2);
            assert_eq!(column, "category");
        }
        other => panic!("expected EmptyValue, got {other:?}"),
    }
}

#[test]
fn test_load_rejects_arrowless_indication() {
    let dir = make_temp_dir();
    let path = dir.join("markers.csv");
    write_file(
        &path,
        "biomarker_name,category,indication\n\
         MUC1,Mucins,high\n",
    );

    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidIndication(name) if name == "MUC1"));
}

#[test]
fn test_load_rejects_duplicate_names() {
    let dir = make_temp_dir();
    let path = dir.join("markers.csv");
    write_file(
        &path,
        "biomarker_name,category,indication\n\
         MUC1,Mucins,↑\n\
         MUC1,Mucins,↑\n",
    );

    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateName(name) if name == "MUC1"));
}

#[test]
fn test_load_tsv_and_gzip() {
    let dir = make_temp_dir();

    let tsv_path = dir.join("markers.tsv");
    write_file(
        &tsv_path,
        "biomarker_name\tcategory\tindication\nMUC1\tMucins\t↑\n",
    );
    let catalog = load_catalog(&tsv_path).unwrap();
    assert!(catalog.contains("MUC1"));

    let gz_path = dir.join("markers.csv.gz");
    write_gz(
        &gz_path,
        "biomarker_name,category,indication\nCEA,Oncofetal antigens,↑\n",
    );
    let catalog = load_catalog(&gz_path).unwrap();
    assert!(catalog.contains("CEA"));
}

#[test]
fn test_load_rejects_unknown_extension() {
    let dir = make_temp_dir();
    let path = dir.join("markers.json");
    write_file(&path, "{}");

    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, CatalogError::UnsupportedFormat(_)));
}
