//! Workbook export - writes an extracted scenario set to a clean workbook,
//! one worksheet per scenario code.

use crate::error::{BevError, BevResult};
use crate::types::{ScenarioSet, STATE_COLUMN};
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tracing::debug;

/// Writes one worksheet per scenario: the state column plus a column per
/// projected year.
pub struct SplitWriter {
    set: ScenarioSet,
}

impl SplitWriter {
    pub fn new(set: ScenarioSet) -> Self {
        Self { set }
    }

    /// Write the split workbook to the given path.
    pub fn write(&self, output_path: &Path) -> BevResult<()> {
        let mut workbook = Workbook::new();

        for (code, table) in self.set.iter() {
            let worksheet = workbook.add_worksheet();
            worksheet
                .set_name(code.as_str())
                .map_err(|e| BevError::Export(format!("Failed to set worksheet name: {}", e)))?;

            // Header row
            worksheet
                .write_string(0, 0, STATE_COLUMN)
                .map_err(|e| BevError::Export(format!("Failed to write header: {}", e)))?;
            for (col, year) in table.years().iter().enumerate() {
                worksheet
                    .write_string(0, col as u16 + 1, year)
                    .map_err(|e| BevError::Export(format!("Failed to write header: {}", e)))?;
            }

            // One row per state; non-numeric source cells stay blank.
            for (row, (state, values)) in table.iter_rows().enumerate() {
                let row = row as u32 + 1;
                worksheet
                    .write_string(row, 0, state)
                    .map_err(|e| BevError::Export(format!("Failed to write state: {}", e)))?;
                for (col, value) in values.iter().enumerate() {
                    if value.is_nan() {
                        continue;
                    }
                    worksheet
                        .write_number(row, col as u16 + 1, *value)
                        .map_err(|e| BevError::Export(format!("Failed to write value: {}", e)))?;
                }
            }

            debug!(code = %code, "wrote scenario worksheet");
        }

        workbook
            .save(output_path)
            .map_err(|e| BevError::Export(format!("Failed to save workbook: {}", e)))?;

        Ok(())
    }
}
