//! Shared workbook fixtures for integration tests
//!
//! Fixtures are generated on the fly with rust_xlsxwriter so the tests do
//! not depend on checked-in binary files.

#![allow(dead_code)] // not every test binary uses every fixture

use rust_xlsxwriter::Workbook;
use std::path::Path;

/// The 16 federal states in dataset order.
pub const STATES: [&str; 16] = [
    "Baden-Württemberg",
    "Bayern",
    "Berlin",
    "Brandenburg",
    "Bremen",
    "Hamburg",
    "Hessen",
    "Mecklenburg-Vorpommern",
    "Niedersachsen",
    "Nordrhein-Westfalen",
    "Rheinland-Pfalz",
    "Saarland",
    "Sachsen",
    "Sachsen-Anhalt",
    "Schleswig-Holstein",
    "Thüringen",
];

/// Scenario codes used by the standard fixture, in sheet order.
pub const CODES: [&str; 6] = [
    "G1L1W1", "G1L2W1", "G2L2W1", "G2L2W2", "G2L2W3", "G3L3W3",
];

/// Year headers as they appear in the source (truncated to 4 chars on import).
pub const YEAR_HEADERS: [&str; 6] = [
    "2022 (Basisjahr)",
    "2030",
    "2040",
    "2050",
    "2060",
    "2070 projiziert",
];

pub const YEARS: [&str; 6] = ["2022", "2030", "2040", "2050", "2060", "2070"];

/// First-year population for a state, in thousands.
pub fn first_value(state_idx: usize) -> f64 {
    1000.0 + 100.0 * state_idx as f64
}

/// Growth factor over the projection horizon for a state.
pub fn growth_factor(state_idx: usize) -> f64 {
    0.8 + 0.03 * state_idx as f64
}

/// Deterministic cell value: linear path from the first-year value to
/// first-year value times the state's growth factor.
pub fn cell_value(state_idx: usize, year_idx: usize) -> f64 {
    let first = first_value(state_idx);
    let factor = growth_factor(state_idx);
    let steps = (YEARS.len() - 1) as f64;
    first * (1.0 + (factor - 1.0) * year_idx as f64 / steps)
}

fn marker_label(code: &str) -> String {
    format!("VARIANTE (BEV-{})", code)
}

/// Standard fixture: header row, then 6 scenario blocks of 16 state rows.
pub fn write_projection_workbook(path: &Path) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.write_string(0, 0, "Bundesland").unwrap();
    for (col, header) in YEAR_HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16 + 1, *header).unwrap();
    }

    let mut row = 1u32;
    for code in CODES {
        worksheet.write_string(row, 0, &marker_label(code)).unwrap();
        row += 1;
        for (idx, state) in STATES.iter().enumerate() {
            worksheet.write_string(row, 0, *state).unwrap();
            for year_idx in 0..YEARS.len() {
                worksheet
                    .write_number(row, year_idx as u16 + 1, cell_value(idx, year_idx))
                    .unwrap();
            }
            row += 1;
        }
    }

    workbook.save(path).unwrap();
}

/// Fixture whose final block is cut off after `rows` state rows.
pub fn write_truncated_workbook(path: &Path, rows: usize) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.write_string(0, 0, "Bundesland").unwrap();
    for (col, header) in YEAR_HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16 + 1, *header).unwrap();
    }

    worksheet.write_string(1, 0, &marker_label("G2L2W2")).unwrap();
    for (idx, state) in STATES.iter().take(rows).enumerate() {
        let row = idx as u32 + 2;
        worksheet.write_string(row, 0, *state).unwrap();
        for year_idx in 0..YEARS.len() {
            worksheet
                .write_number(row, year_idx as u16 + 1, cell_value(idx, year_idx))
                .unwrap();
        }
    }

    workbook.save(path).unwrap();
}

/// Fixture with the same scenario code appearing twice. The second block's
/// values are the first block's plus `offset`.
pub fn write_duplicate_marker_workbook(path: &Path, offset: f64) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.write_string(0, 0, "Bundesland").unwrap();
    for (col, header) in YEAR_HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16 + 1, *header).unwrap();
    }

    let mut row = 1u32;
    for block in 0..2u32 {
        worksheet.write_string(row, 0, &marker_label("G2L2W2")).unwrap();
        row += 1;
        for (idx, state) in STATES.iter().enumerate() {
            worksheet.write_string(row, 0, *state).unwrap();
            for year_idx in 0..YEARS.len() {
                let value = cell_value(idx, year_idx) + block as f64 * offset;
                worksheet
                    .write_number(row, year_idx as u16 + 1, value)
                    .unwrap();
            }
            row += 1;
        }
    }

    workbook.save(path).unwrap();
}

/// Fixture with numeric cells in the label column; none of them may be
/// treated as a scenario marker.
pub fn write_numeric_labels_workbook(path: &Path) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.write_string(0, 0, "Bundesland").unwrap();
    for (col, header) in YEAR_HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16 + 1, *header).unwrap();
    }

    // Numeric junk rows before the only real marker
    worksheet.write_number(1, 0, 12421.0).unwrap();
    worksheet.write_number(2, 0, 2022.0).unwrap();

    worksheet.write_string(3, 0, &marker_label("G2L2W1")).unwrap();
    for (idx, state) in STATES.iter().enumerate() {
        let row = idx as u32 + 4;
        worksheet.write_string(row, 0, *state).unwrap();
        for year_idx in 0..YEARS.len() {
            worksheet
                .write_number(row, year_idx as u16 + 1, cell_value(idx, year_idx))
                .unwrap();
        }
    }

    workbook.save(path).unwrap();
}
