//! Report export - one worksheet per scenario, or a YAML document.

use crate::error::{BevError, BevResult};
use crate::report::{ExtremesScenario, GrowthScenario, Report, TrendScenario};
use crate::types::STATE_COLUMN;
use chrono::Local;
use rust_xlsxwriter::{Workbook, Worksheet};
use std::fs;
use std::path::Path;

/// Write the report to the given path, dispatching on the file extension.
pub fn export_report(report: &Report, output_path: &Path) -> BevResult<()> {
    let extension = output_path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    match extension {
        "xlsx" => export_to_excel(report, output_path),
        "yaml" | "yml" => export_to_yaml(report, output_path),
        _ => Err(BevError::Export(format!(
            "Unsupported output format: {}. Use .xlsx or .yaml",
            extension
        ))),
    }
}

fn export_to_yaml(report: &Report, output_path: &Path) -> BevResult<()> {
    let yaml = serde_yaml::to_string(report)
        .map_err(|e| BevError::Export(format!("Failed to serialize report: {}", e)))?;
    fs::write(output_path, yaml)?;
    Ok(())
}

fn export_to_excel(report: &Report, output_path: &Path) -> BevResult<()> {
    let mut workbook = Workbook::new();

    match report {
        Report::Trend { scenarios, .. } => {
            for scenario in scenarios {
                let worksheet = named_worksheet(&mut workbook, &scenario.code)?;
                write_trend_sheet(worksheet, scenario)?;
            }
        }
        Report::Growth { scenarios, .. } => {
            for scenario in scenarios {
                let worksheet = named_worksheet(&mut workbook, &scenario.code)?;
                write_growth_sheet(worksheet, scenario)?;
            }
        }
        Report::Extremes { scenarios, .. } => {
            for scenario in scenarios {
                let worksheet = named_worksheet(&mut workbook, &scenario.code)?;
                write_extremes_sheet(worksheet, scenario)?;
            }
        }
    }

    workbook
        .save(output_path)
        .map_err(|e| BevError::Export(format!("Failed to save report workbook: {}", e)))?;

    Ok(())
}

fn named_worksheet<'a>(workbook: &'a mut Workbook, name: &str) -> BevResult<&'a mut Worksheet> {
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(name)
        .map_err(|e| BevError::Export(format!("Failed to set worksheet name: {}", e)))?;
    Ok(worksheet)
}

fn write_trend_sheet(worksheet: &mut Worksheet, scenario: &TrendScenario) -> BevResult<()> {
    write_str(worksheet, 0, 0, STATE_COLUMN)?;
    for (col, year) in scenario.years.iter().enumerate() {
        write_str(worksheet, 0, col as u16 + 1, year)?;
    }
    write_str(worksheet, 0, scenario.years.len() as u16 + 1, "Change")?;

    for (row, trend) in scenario.rows.iter().enumerate() {
        let row = row as u32 + 1;
        write_str(worksheet, row, 0, &trend.state)?;
        for (col, value) in trend.values.iter().enumerate() {
            write_num(worksheet, row, col as u16 + 1, *value)?;
        }
        write_num(
            worksheet,
            row,
            scenario.years.len() as u16 + 1,
            trend.change,
        )?;
    }

    write_stamp(worksheet, scenario.rows.len() as u32 + 2)
}

fn write_growth_sheet(worksheet: &mut Worksheet, scenario: &GrowthScenario) -> BevResult<()> {
    let has_group = scenario.rows.iter().any(|r| r.group.is_some());

    write_str(worksheet, 0, 0, STATE_COLUMN)?;
    write_str(worksheet, 0, 1, &scenario.first_year)?;
    write_str(worksheet, 0, 2, &scenario.last_year)?;
    write_str(worksheet, 0, 3, "Growth %")?;
    if has_group {
        write_str(worksheet, 0, 4, "Group")?;
    }

    for (row, growth) in scenario.rows.iter().enumerate() {
        let row = row as u32 + 1;
        write_str(worksheet, row, 0, &growth.state)?;
        write_num(worksheet, row, 1, growth.first)?;
        write_num(worksheet, row, 2, growth.last)?;
        write_num(worksheet, row, 3, growth.growth_pct)?;
        if let Some(ref group) = growth.group {
            write_str(worksheet, row, 4, group)?;
        }
    }

    write_stamp(worksheet, scenario.rows.len() as u32 + 2)
}

fn write_extremes_sheet(worksheet: &mut Worksheet, scenario: &ExtremesScenario) -> BevResult<()> {
    write_str(worksheet, 0, 0, STATE_COLUMN)?;
    write_str(worksheet, 0, 1, &scenario.first_year)?;
    write_str(worksheet, 0, 2, &scenario.last_year)?;
    write_str(worksheet, 0, 3, "Change %")?;

    for (row, extreme) in scenario.rows.iter().enumerate() {
        let row = row as u32 + 1;
        write_str(worksheet, row, 0, &extreme.state)?;
        write_num(worksheet, row, 1, extreme.first)?;
        write_num(worksheet, row, 2, extreme.last)?;
        write_num(worksheet, row, 3, extreme.change_pct)?;
    }

    write_stamp(worksheet, scenario.rows.len() as u32 + 2)
}

fn write_stamp(worksheet: &mut Worksheet, row: u32) -> BevResult<()> {
    let stamp = format!("Generated {}", Local::now().format("%Y-%m-%d %H:%M"));
    write_str(worksheet, row, 0, &stamp)
}

fn write_str(worksheet: &mut Worksheet, row: u32, col: u16, value: &str) -> BevResult<()> {
    worksheet
        .write_string(row, col, value)
        .map_err(|e| BevError::Export(format!("Failed to write cell: {}", e)))?;
    Ok(())
}

/// Blank cell for NaN; xlsx has no representation for it.
fn write_num(worksheet: &mut Worksheet, row: u32, col: u16, value: f64) -> BevResult<()> {
    if value.is_nan() {
        return Ok(());
    }
    worksheet
        .write_number(row, col, value)
        .map_err(|e| BevError::Export(format!("Failed to write cell: {}", e)))?;
    Ok(())
}
