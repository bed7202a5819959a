//! Plain-text result report: commented settings header, extrema summary and a
//! tab-separated score table.
//!
//! Exports carry a `.csv` file name but the table is tab-delimited.

use crate::config::Configuration;
use crate::error::{MicrotiterError, MtResult};
use crate::scorer::types::{row_label, CellIndex, ScoreMatrix};
use std::ffi::OsString;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

pub const EXPORT_EXTENSION: &str = "csv";

/// Renders the report for `matrix` using the method labels given.
pub fn format_report(
    config: &Configuration,
    matrix: &ScoreMatrix,
    aggregation_label: &str,
    scoring_label: &str,
) -> MtResult<String> {
    if matrix.rows() != config.rows as usize || matrix.columns() != config.columns as usize {
        return Err(MicrotiterError::InvalidConfiguration(format!(
            "score matrix is {} x {} but the grid is {} x {}",
            matrix.rows(),
            matrix.columns(),
            config.rows,
            config.columns
        )));
    }

    let mut out = String::new();

    out.push_str("# Settings:\n");
    let settings: [(&str, String); 13] = [
        ("path_samples", config.path_samples.clone()),
        ("path_control", config.path_control.clone()),
        ("top_left_x", config.top_left.x.to_string()),
        ("top_left_y", config.top_left.y.to_string()),
        ("bottom_right_x", config.bottom_right.x.to_string()),
        ("bottom_right_y", config.bottom_right.y.to_string()),
        ("n_rows", config.rows.to_string()),
        ("n_columns", config.columns.to_string()),
        ("control_x", config.control_position.x.to_string()),
        ("control_y", config.control_position.y.to_string()),
        ("AoI_size", config.aoi_size.to_string()),
        ("aggregation_method", aggregation_label.to_string()),
        ("scoring_method", scoring_label.to_string()),
    ];
    for (key, value) in &settings {
        out.push_str(&format!("# {} = {}\n", key, value));
    }

    out.push_str("# Results:\n");
    let describe =
        |cell: Option<CellIndex>| cell.map_or_else(|| "n/a".to_string(), |c| c.to_string());
    out.push_str(&format!("# Closest match: {}\n", describe(matrix.closest_match())));
    out.push_str(&format!("# Farthest match: {}\n", describe(matrix.farthest_match())));

    out.push_str(&format_table(matrix)?);
    Ok(out)
}

/// Same as [`format_report`], labelling methods from the configuration.
pub fn format_config_report(config: &Configuration, matrix: &ScoreMatrix) -> MtResult<String> {
    format_report(
        config,
        matrix,
        config.aggregation_method.label(),
        config.scoring_method.label(),
    )
}

/// Header of column indices `0..=columns` (the first is the row-label
/// filler), then one line per row: letter label and scores to 2 decimals.
pub fn format_table(matrix: &ScoreMatrix) -> MtResult<String> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let header: Vec<String> = (0..=matrix.columns()).map(|i| i.to_string()).collect();
    wtr.write_record(&header)?;

    for (idx, row) in matrix.iter_rows().enumerate() {
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(row_label(idx).to_string());
        record.extend(row.iter().map(|score| format!("{:.2}", score)));
        wtr.write_record(&record)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| MicrotiterError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| MicrotiterError::MalformedReport(e.to_string()))
}

/// Writes the report verbatim, appending `.csv` when the name lacks it.
/// Returns the path actually written.
pub fn export_report<P: AsRef<Path>>(path: P, report: &str) -> MtResult<PathBuf> {
    let path = path.as_ref();
    let target = if path.to_string_lossy().ends_with(".csv") {
        path.to_path_buf()
    } else {
        let mut name = OsString::from(path.as_os_str());
        name.push(".");
        name.push(EXPORT_EXTENSION);
        PathBuf::from(name)
    };

    fs::write(&target, report)?;
    info!("Report written to {}", target.display());
    Ok(target)
}

/// Parses the score table of an exported report. Comment lines are skipped;
/// trailing empty fields are tolerated.
pub fn read_score_table<R: Read>(reader: R) -> MtResult<ScoreMatrix> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .comment(Some(b'#'))
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let header = rdr.headers()?.clone();
    let header_len = trimmed_len(&header);
    if header_len < 2 {
        return Err(MicrotiterError::MalformedReport(
            "table header lists no score columns".to_string(),
        ));
    }
    let columns = header_len - 1;

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let rec = result?;
        let len = trimmed_len(&rec);
        if len == 0 {
            continue;
        }
        if len != columns + 1 {
            return Err(MicrotiterError::MalformedReport(format!(
                "row {} has {} scores, expected {}",
                idx + 1,
                len - 1,
                columns
            )));
        }
        let expected_label = row_label(rows.len()).to_string();
        if rec[0].trim() != expected_label {
            return Err(MicrotiterError::MalformedReport(format!(
                "row {} is labelled '{}', expected '{}'",
                idx + 1,
                &rec[0],
                expected_label
            )));
        }

        let mut scores = Vec::with_capacity(columns);
        for field in rec.iter().skip(1).take(columns) {
            let value: f64 = field.trim().parse().map_err(|_| {
                MicrotiterError::MalformedReport(format!("invalid score '{}'", field))
            })?;
            scores.push(value);
        }
        rows.push(scores);
    }

    if rows.is_empty() {
        return Err(MicrotiterError::MalformedReport(
            "table has no rows".to_string(),
        ));
    }
    Ok(ScoreMatrix::from_rows(rows))
}

fn trimmed_len(rec: &csv::StringRecord) -> usize {
    let mut len = rec.len();
    while len > 0 && rec[len - 1].trim().is_empty() {
        len -= 1;
    }
    len
}
