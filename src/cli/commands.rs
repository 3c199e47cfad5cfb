use crate::error::{BevError, BevResult};
use crate::excel::{ScenarioExtractor, SplitWriter};
use crate::report::{self, export::export_report, render, Question};
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

/// Execute the report command
pub fn report(
    file: PathBuf,
    question: u8,
    output: Option<PathBuf>,
    verbose: bool,
) -> BevResult<()> {
    println!(
        "{}",
        "📈 bevscope - Population projection report".bold().green()
    );
    println!("   File: {}", file.display());
    println!(
        "   Question: {}\n",
        question.to_string().bright_yellow().bold()
    );

    let question = Question::from_number(question).ok_or_else(|| {
        BevError::Validation(format!(
            "Question must be between 1 and 6, got {}",
            question
        ))
    })?;

    if verbose {
        println!("{}", "📖 Reading workbook...".cyan());
    }

    let set = ScenarioExtractor::new(&file).extract()?;
    info!(scenarios = set.len(), "extracted scenario tables");

    if set.is_empty() {
        println!("{}", "⚠️  No scenario markers found in workbook".yellow());
        return Ok(());
    }

    if verbose {
        let codes: Vec<&str> = set.codes().iter().map(|c| c.as_str()).collect();
        println!("   Found {} scenarios: {}\n", set.len(), codes.join(", "));
    }

    let report = report::build(question, &set)?;

    match output {
        Some(path) => {
            export_report(&report, &path)?;
            println!(
                "{}",
                format!("✅ Report exported to {}", path.display())
                    .bold()
                    .green()
            );
        }
        None => {
            render::print_report(&report);
            println!("\n{}", "✅ Report complete".bold().green());
        }
    }

    Ok(())
}

/// Execute the scenarios command - list extracted scenario blocks
pub fn scenarios(file: PathBuf) -> BevResult<()> {
    println!("{}", "📈 bevscope - Scenario overview".bold().green());
    println!("   File: {}\n", file.display());

    let set = ScenarioExtractor::new(&file).extract()?;

    if set.is_empty() {
        println!("{}", "⚠️  No scenario markers found in workbook".yellow());
        return Ok(());
    }

    for (code, table) in set.iter() {
        let span = match (table.first_year(), table.last_year()) {
            (Some(first), Some(last)) => format!("{}-{}", first, last),
            _ => "no years".to_string(),
        };
        println!(
            "   {} ({} states, {})",
            code.as_str().bright_blue().bold(),
            table.row_count(),
            span
        );
        if let Some(assumptions) = code.assumptions() {
            for line in assumptions.describe() {
                println!("      {}", line.dimmed());
            }
        }
    }

    println!(
        "\n{}",
        format!("✅ {} scenarios found", set.len()).bold().green()
    );
    Ok(())
}

/// Execute the split command - write one worksheet per scenario
pub fn split(input: PathBuf, output: PathBuf, verbose: bool) -> BevResult<()> {
    println!("{}", "📈 bevscope - Scenario split".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    let set = ScenarioExtractor::new(&input).extract()?;

    if verbose {
        let codes: Vec<&str> = set.codes().iter().map(|c| c.as_str()).collect();
        println!("   Found {} scenarios: {}\n", set.len(), codes.join(", "));
    }

    if set.is_empty() {
        println!("{}", "⚠️  No scenario markers found in workbook".yellow());
        return Ok(());
    }

    SplitWriter::new(set).write(&output)?;
    info!(output = %output.display(), "split workbook written");

    println!(
        "{}",
        format!("✅ Split workbook written to {}", output.display())
            .bold()
            .green()
    );
    Ok(())
}
