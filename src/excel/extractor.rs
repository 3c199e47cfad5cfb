//! Workbook import - splits the flat Destatis projection sheet into
//! per-scenario tables.

use crate::error::{BevError, BevResult};
use crate::types::{ScenarioCode, ScenarioSet, ScenarioTable, SCENARIO_MARKER, STATE_COUNT};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extractor for the flat projection workbook.
///
/// The sheet carries a header row (label column plus one column per year)
/// followed by scenario blocks: a marker row whose label contains
/// [`SCENARIO_MARKER`], then one row per federal state.
pub struct ScenarioExtractor {
    path: PathBuf,
}

impl ScenarioExtractor {
    /// Create a new extractor for the given workbook path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the workbook's first worksheet and split it into one table per
    /// scenario, in marker order.
    pub fn extract(&self) -> BevResult<ScenarioSet> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)
            .map_err(|e| BevError::Format(format!("Failed to open workbook: {}", e)))?;

        // The projection sheet is the first sheet in the workbook.
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| BevError::Format("Workbook has no worksheets".to_string()))?;
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| BevError::Format(format!("Failed to read worksheet: {}", e)))?;

        split_scenarios(&range)
    }
}

/// Split a projection sheet into per-scenario tables.
///
/// Row 0 is the header; the remaining rows are scanned top to bottom for
/// marker labels. Each marker is followed by up to [`STATE_COUNT`] state
/// rows - fewer if the sheet ends early, which is accepted as-is.
pub fn split_scenarios(range: &Range<Data>) -> BevResult<ScenarioSet> {
    let (height, width) = range.get_size();

    if width == 0 {
        return Err(BevError::Format(
            "Worksheet has no label column".to_string(),
        ));
    }

    let years = year_headers(range, width);
    let mut set = ScenarioSet::new();

    for row in 1..height {
        // Only string labels can be markers; numeric or missing label
        // cells never start a block.
        let label = match range.get((row, 0)) {
            Some(Data::String(s)) => s,
            _ => continue,
        };
        if !label.contains(SCENARIO_MARKER) {
            continue;
        }

        let code = ScenarioCode::from_marker_label(label);
        let table = collect_block(range, row + 1, height, width, &years);
        debug!(code = %code, rows = table.row_count(), "found scenario block");
        set.insert(code, table);
    }

    Ok(set)
}

/// Year column headers: every header after the label column, truncated to
/// its first 4 characters ("2022 (Basisjahr)" becomes "2022").
fn year_headers(range: &Range<Data>, width: usize) -> Vec<String> {
    let mut years = Vec::with_capacity(width - 1);
    for col in 1..width {
        let header = match range.get((0, col)) {
            Some(Data::Empty) | None => format!("col_{}", col),
            Some(cell) => cell.to_string(),
        };
        years.push(header.chars().take(4).collect());
    }
    years
}

/// Collect the state rows following a marker row into a table.
fn collect_block(
    range: &Range<Data>,
    start: usize,
    height: usize,
    width: usize,
    years: &[String],
) -> ScenarioTable {
    let mut table = ScenarioTable::new(years.to_vec());

    let end = (start + STATE_COUNT).min(height);
    for row in start..end {
        let state = match range.get((row, 0)) {
            Some(Data::Empty) | None => String::new(),
            Some(cell) => cell.to_string(),
        };

        let mut values = Vec::with_capacity(width - 1);
        for col in 1..width {
            values.push(cell_to_f64(range.get((row, col))));
        }
        table.push_row(state, values);
    }

    table
}

/// Numeric cell value, NaN for anything that is not a number.
fn cell_to_f64(cell: Option<&Data>) -> f64 {
    match cell {
        Some(Data::Float(f)) => *f,
        Some(Data::Int(i)) => *i as f64,
        _ => f64::NAN,
    }
}
