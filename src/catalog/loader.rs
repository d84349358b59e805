use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::io;
use std::path::Path;

use super::types::{Catalog, CatalogRecord, ADAPTIVE_SUPPORT_COLUMN, REMOTE_TESTING_COLUMN};

const ASSESSMENT_NAME_COLUMN: &str = "Assessments";
const URL_COLUMN: &str = "URL";

/// Legacy metadata headers and their canonical replacements.
const COLUMN_RENAMES: &[(&str, &str)] = &[
    ("Remote Testing", REMOTE_TESTING_COLUMN),
    ("Adaptive Support", ADAPTIVE_SUPPORT_COLUMN),
];

/// A parsed tabular source: trimmed headers plus rows of cells.
struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Load the catalog from the two CSV sources.
///
/// Source 1 must carry the `Assessments` and `URL` columns; source 2 carries
/// free-form metadata columns. The sources are paired strictly by row
/// position, so a row-count mismatch is a load error rather than a silent
/// misalignment. Any failure here is fatal to startup: the process must not
/// serve without a fully built catalog.
pub fn load(
    assessments_path: impl AsRef<Path>,
    metadata_path: impl AsRef<Path>,
) -> Result<Catalog> {
    let assessments_path = assessments_path.as_ref();
    let metadata_path = metadata_path.as_ref();

    let assessments = read_table_from_path(assessments_path)
        .with_context(|| format!("failed to load assessments from {}", assessments_path.display()))?;
    let metadata = read_table_from_path(metadata_path)
        .with_context(|| format!("failed to load metadata from {}", metadata_path.display()))?;

    merge(assessments, metadata)
}

/// Load the catalog from in-memory CSV sources. Same semantics as [`load`].
pub fn load_from_readers(assessments: impl io::Read, metadata: impl io::Read) -> Result<Catalog> {
    let assessments = parse_table(csv::Reader::from_reader(assessments))
        .context("failed to parse assessments source")?;
    let metadata =
        parse_table(csv::Reader::from_reader(metadata)).context("failed to parse metadata source")?;

    merge(assessments, metadata)
}

fn read_table_from_path(path: &Path) -> Result<Table> {
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    parse_table(reader)
}

fn parse_table<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Table> {
    // Header whitespace is trimmed before any column lookup.
    let headers: Vec<String> = reader
        .headers()
        .context("failed to read CSV headers")?
        .iter()
        .map(|header| header.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to read CSV row")?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    Ok(Table { headers, rows })
}

fn merge(assessments: Table, mut metadata: Table) -> Result<Catalog> {
    rename_legacy_columns(&mut metadata.headers);

    let name_position = column_position(&assessments.headers, ASSESSMENT_NAME_COLUMN)?;
    let url_position = column_position(&assessments.headers, URL_COLUMN)?;

    // Rows are paired purely by position; diverging counts would silently
    // attach metadata to the wrong assessment, so refuse to start instead.
    if assessments.rows.len() != metadata.rows.len() {
        bail!(
            "row count mismatch between sources: {} assessment rows vs {} metadata rows",
            assessments.rows.len(),
            metadata.rows.len()
        );
    }

    let records = assessments
        .rows
        .iter()
        .zip(metadata.rows.iter())
        .map(|(assessment_row, metadata_row)| {
            let name = cell(assessment_row, name_position);
            let url = cell(assessment_row, url_position);

            let mut fields = HashMap::new();
            for (position, header) in metadata.headers.iter().enumerate() {
                let value = cell(metadata_row, position);
                let value = if is_flag_column(header) {
                    normalize_yes_no(&value).to_string()
                } else {
                    value
                };
                fields.insert(header.clone(), value);
            }

            CatalogRecord::new(name, url, fields)
        })
        .collect();

    Ok(Catalog::new(records))
}

fn rename_legacy_columns(headers: &mut [String]) {
    for header in headers.iter_mut() {
        if let Some((_, canonical)) = COLUMN_RENAMES
            .iter()
            .find(|(legacy, _)| *legacy == header.as_str())
        {
            *header = canonical.to_string();
        }
    }
}

fn column_position(headers: &[String], column: &str) -> Result<usize> {
    headers.iter().position(|header| header == column).with_context(|| {
        format!(
            "missing required column {:?} (available columns: {:?})",
            column, headers
        )
    })
}

/// Absent cells become empty strings before composite-text construction.
fn cell(row: &[String], position: usize) -> String {
    row.get(position).cloned().unwrap_or_default()
}

fn is_flag_column(header: &str) -> bool {
    header == REMOTE_TESTING_COLUMN || header == ADAPTIVE_SUPPORT_COLUMN
}

/// Canonicalize a Yes/No-like value: an exact case-insensitive "yes" (after
/// trimming) becomes "Yes"; everything else, including blanks, becomes "No".
fn normalize_yes_no(value: &str) -> &'static str {
    if value.trim().eq_ignore_ascii_case("yes") {
        "Yes"
    } else {
        "No"
    }
}
