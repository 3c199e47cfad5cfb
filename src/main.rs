use bevscope::cli;
use bevscope::error::BevResult;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bevscope")]
#[command(about = "Explore Destatis population projections for the German federal states.")]
#[command(long_about = "bevscope - German state population projection explorer

Splits the Destatis projection workbook (12421-0003 layout) into one table
per demographic scenario and reports on six research questions.

COMMANDS:
  report     - Answer one of the six research questions
  scenarios  - List the scenario blocks found in a workbook
  split      - Write one worksheet per scenario to a new workbook

QUESTIONS:
  1  Overall projection trend for all 16 states
  2  States with consistently higher projected growth
  3  States with consistent decline or stagnation
  4  Most vs least populous state (Nordrhein-Westfalen vs Bremen)
  5  Former East vs West Germany comparison
  6  Urban vs rural states comparison

EXAMPLES:
  bevscope report data/12421-0003.xlsx --question 1
  bevscope report data/12421-0003.xlsx -q 2 -o growth.xlsx
  bevscope scenarios data/12421-0003.xlsx
  bevscope split data/12421-0003.xlsx scenarios.xlsx")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Answer one of the six research questions.

Loads the workbook, splits it into per-scenario tables and prints the
derived report to the terminal, one block per scenario with the scenario's
demographic assumptions.

Questions 2 and 3 share the growth ranking; questions 5 and 6 apply an
East/West or Urban/Rural grouping to it.

With --output the report is written to a file instead; the format follows
the extension (.xlsx or .yaml).")]
    /// Answer one of the six research questions
    Report {
        /// Path to the projection workbook (.xlsx)
        file: PathBuf,

        /// Question number
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=6))]
        question: u8,

        /// Write the report to a file (.xlsx or .yaml) instead of the terminal
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show verbose progress
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the scenario blocks found in a workbook
    Scenarios {
        /// Path to the projection workbook (.xlsx)
        file: PathBuf,
    },

    #[command(long_about = "Write one worksheet per scenario to a new workbook.

The flat projection sheet is split at each scenario marker; every scenario
code becomes a worksheet with the state column and one column per year.")]
    /// Write one worksheet per scenario to a new workbook
    Split {
        /// Path to the projection workbook (.xlsx)
        input: PathBuf,

        /// Output workbook path (.xlsx)
        output: PathBuf,

        /// Show verbose progress
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> BevResult<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            file,
            question,
            output,
            verbose,
        } => cli::report(file, question, output, verbose),

        Commands::Scenarios { file } => cli::scenarios(file),

        Commands::Split {
            input,
            output,
            verbose,
        } => cli::split(input, output, verbose),
    }
}
