//! bevscope - German state population projection explorer
//!
//! This library loads the Destatis projection workbook (12421-0003 layout),
//! splits it into one table per demographic scenario, and builds reports
//! answering a fixed set of research questions.
//!
//! # Features
//!
//! - Scenario extraction from the flat projection sheet (BEV marker rows)
//! - Typed scenario codes with decoded demographic assumptions
//! - Growth rankings, extremes comparison, East/West and Urban/Rural groupings
//! - Report export to Excel (.xlsx) and YAML
//!
//! # Example
//!
//! ```no_run
//! use bevscope::excel::ScenarioExtractor;
//!
//! let set = ScenarioExtractor::new("data/12421-0003.xlsx").extract()?;
//!
//! println!("Scenarios: {}", set.len());
//! for (code, table) in set.iter() {
//!     println!("{}: {} states", code, table.row_count());
//! }
//! # Ok::<(), bevscope::error::BevError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use error::{BevError, BevResult};
pub use excel::{ScenarioExtractor, SplitWriter};
pub use types::{ScenarioCode, ScenarioSet, ScenarioTable};
