//! Terminal rendering for reports

use crate::report::{ExtremesScenario, GrowthScenario, Report, TrendScenario};
use crate::types::{ScenarioCode, STATE_COLUMN};
use colored::Colorize;

/// Width of the state-name column; "Mecklenburg-Vorpommern" is the longest.
const STATE_WIDTH: usize = 24;

/// Print a report to the terminal, one block per scenario.
pub fn print_report(report: &Report) {
    match report {
        Report::Trend { title, scenarios } => print_trend(title, scenarios),
        Report::Growth {
            title,
            footnote,
            scenarios,
        } => print_growth(title, footnote, scenarios),
        Report::Extremes { title, scenarios } => print_extremes(title, scenarios),
    }
}

fn print_trend(title: &str, scenarios: &[TrendScenario]) {
    println!("{}", format!("📊 {}", title).bold().cyan());

    for scenario in scenarios {
        let width = STATE_WIDTH + (scenario.years.len() + 1) * 10;
        println!("\n{}", format!("Scenario {}", scenario.code).bright_blue().bold());
        println!("{}", "─".repeat(width));

        print!("{:<24}", STATE_COLUMN.bold());
        for year in &scenario.years {
            print!("{:>10}", year.bold());
        }
        println!("{:>10}", "Change".bold());
        println!("{}", "─".repeat(width));

        for row in &scenario.rows {
            print!("{:<24}", row.state);
            for value in &row.values {
                print!("{:>10}", fmt_value(*value));
            }
            println!("{:>10}", fmt_signed(row.change));
        }
        println!("{}", "─".repeat(width));

        print_assumptions(&scenario.code);
    }

    println!("\n   Population in thousands.");
}

fn print_growth(title: &str, footnote: &str, scenarios: &[GrowthScenario]) {
    println!("{}", format!("📊 {}", title).bold().cyan());

    for scenario in scenarios {
        let has_group = scenario.rows.iter().any(|r| r.group.is_some());
        let width = STATE_WIDTH + 30 + if has_group { 8 } else { 0 };

        println!("\n{}", format!("Scenario {}", scenario.code).bright_blue().bold());
        println!("{}", "─".repeat(width));

        print!(
            "{:<24}{:>10}{:>10}{:>10}",
            STATE_COLUMN.bold(),
            scenario.first_year.bold(),
            scenario.last_year.bold(),
            "Growth".bold()
        );
        if has_group {
            print!("{:>8}", "Group".bold());
        }
        println!();
        println!("{}", "─".repeat(width));

        for row in &scenario.rows {
            let growth = fmt_value(row.growth_pct);
            let growth = if row.growth_pct >= 100.0 {
                growth.green()
            } else {
                growth.red()
            };
            print!(
                "{:<24}{:>10}{:>10}{:>10}",
                row.state,
                fmt_value(row.first),
                fmt_value(row.last),
                growth
            );
            if let Some(ref group) = row.group {
                print!("{:>8}", group.cyan());
            }
            println!();
        }
        println!("{}", "─".repeat(width));

        print_assumptions(&scenario.code);
    }

    println!("\n   {}", format!("*{}", footnote).italic().dimmed());
}

fn print_extremes(title: &str, scenarios: &[ExtremesScenario]) {
    println!("{}", format!("📊 {}", title).bold().cyan());

    for scenario in scenarios {
        let width = STATE_WIDTH + 30;
        println!("\n{}", format!("Scenario {}", scenario.code).bright_blue().bold());
        println!("{}", "─".repeat(width));
        println!(
            "{:<24}{:>10}{:>10}{:>10}",
            STATE_COLUMN.bold(),
            scenario.first_year.bold(),
            scenario.last_year.bold(),
            "Change".bold()
        );
        println!("{}", "─".repeat(width));

        for row in &scenario.rows {
            let change = format!("{:+.2}%", row.change_pct);
            let change = if row.change_pct >= 0.0 {
                change.green()
            } else {
                change.red()
            };
            println!(
                "{:<24}{:>10}{:>10}{:>10}",
                row.state,
                fmt_value(row.first),
                fmt_value(row.last),
                change
            );
        }
        println!("{}", "─".repeat(width));

        print_assumptions(&scenario.code);
    }

    println!("\n   Population in thousands.");
}

fn print_assumptions(code: &str) {
    if let Some(assumptions) = ScenarioCode::new(code).assumptions() {
        for line in assumptions.describe() {
            println!("   {}", line.dimmed());
        }
    }
}

fn fmt_value(v: f64) -> String {
    if v.is_nan() {
        "-".to_string()
    } else {
        format!("{:.1}", v)
    }
}

fn fmt_signed(v: f64) -> String {
    if v.is_nan() {
        "-".to_string()
    } else {
        format!("{:+.1}", v)
    }
}
