//! Report building for the six research questions.
//!
//! Each question reduces the per-scenario tables to a small derived table:
//! full per-year series (question 1), growth rankings (questions 2/3, 5, 6)
//! or a two-state comparison (question 4). Derived figures are computed on
//! copies; the extracted tables themselves stay untouched.

use crate::error::{BevError, BevResult};
use crate::types::{ScenarioSet, ScenarioTable};
use serde::Serialize;
use std::cmp::Ordering;

pub mod export;
pub mod render;

//==============================================================================
// Fixed state lists
//==============================================================================

/// Former East Germany states. Berlin is left out of the East/West split
/// owing to its historical partition.
pub const EAST_STATES: [&str; 5] = [
    "Brandenburg",
    "Mecklenburg-Vorpommern",
    "Sachsen",
    "Sachsen-Anhalt",
    "Thüringen",
];

/// States with at least one city above 500 000 inhabitants.
pub const URBAN_STATES: [&str; 9] = [
    "Berlin",
    "Hamburg",
    "Bayern",
    "Nordrhein-Westfalen",
    "Hessen",
    "Baden-Württemberg",
    "Sachsen",
    "Bremen",
    "Niedersachsen",
];

pub const MOST_POPULOUS_STATE: &str = "Nordrhein-Westfalen";
pub const LEAST_POPULOUS_STATE: &str = "Bremen";

//==============================================================================
// Question selector
//==============================================================================

/// The research question being answered. Questions 2 and 3 share the growth
/// ranking; 5 and 6 are the same ranking under different groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    OverallTrend,
    GrowthRanking,
    ExtremesComparison,
    EastWest,
    UrbanRural,
}

impl Question {
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Question::OverallTrend),
            2 | 3 => Some(Question::GrowthRanking),
            4 => Some(Question::ExtremesComparison),
            5 => Some(Question::EastWest),
            6 => Some(Question::UrbanRural),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Question::OverallTrend => "Population projection for all federal states",
            Question::GrowthRanking => "Projected population growth by state",
            Question::ExtremesComparison => "Most vs least populous state",
            Question::EastWest => "Projected growth, former East vs West Germany",
            Question::UrbanRural => "Projected growth, urban vs rural states",
        }
    }
}

/// Grouping applied to a growth ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    EastWest,
    UrbanRural,
}

impl Grouping {
    fn label(&self, state: &str) -> &'static str {
        match self {
            Grouping::EastWest => {
                if EAST_STATES.contains(&state) {
                    "East"
                } else {
                    "West"
                }
            }
            Grouping::UrbanRural => {
                if URBAN_STATES.contains(&state) {
                    "Urban"
                } else {
                    "Rural"
                }
            }
        }
    }

    /// Berlin is dropped from the East/West split.
    fn skips(&self, state: &str) -> bool {
        matches!(self, Grouping::EastWest) && state == "Berlin"
    }
}

//==============================================================================
// Report shapes
//==============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct TrendRow {
    pub state: String,
    /// Population per year, in thousands, in year order.
    pub values: Vec<f64>,
    /// Absolute change from first to last year, in thousands.
    pub change: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendScenario {
    pub code: String,
    pub years: Vec<String>,
    pub rows: Vec<TrendRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GrowthRow {
    pub state: String,
    pub first: f64,
    pub last: f64,
    /// Population ratio last/first in percent, rounded to 2 decimals.
    pub growth_pct: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GrowthScenario {
    pub code: String,
    pub first_year: String,
    pub last_year: String,
    /// Rows sorted by growth, highest first.
    pub rows: Vec<GrowthRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtremesRow {
    pub state: String,
    pub first: f64,
    pub last: f64,
    /// Percent change from first to last year, rounded to 2 decimals.
    pub change_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtremesScenario {
    pub code: String,
    pub first_year: String,
    pub last_year: String,
    pub rows: Vec<ExtremesRow>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Trend {
        title: String,
        scenarios: Vec<TrendScenario>,
    },
    Growth {
        title: String,
        footnote: String,
        scenarios: Vec<GrowthScenario>,
    },
    Extremes {
        title: String,
        scenarios: Vec<ExtremesScenario>,
    },
}

impl Report {
    pub fn title(&self) -> &str {
        match self {
            Report::Trend { title, .. }
            | Report::Growth { title, .. }
            | Report::Extremes { title, .. } => title,
        }
    }
}

//==============================================================================
// Builders
//==============================================================================

/// Build the report answering the given question.
pub fn build(question: Question, set: &ScenarioSet) -> BevResult<Report> {
    match question {
        Question::OverallTrend => overall_trend(set),
        Question::GrowthRanking => growth_ranking(set, None),
        Question::EastWest => growth_ranking(set, Some(Grouping::EastWest)),
        Question::UrbanRural => growth_ranking(set, Some(Grouping::UrbanRural)),
        Question::ExtremesComparison => extremes(set),
    }
}

/// Question 1: every state's full projected series, per scenario.
pub fn overall_trend(set: &ScenarioSet) -> BevResult<Report> {
    let mut scenarios = Vec::with_capacity(set.len());

    for (code, table) in set.iter() {
        let rows = table
            .iter_rows()
            .map(|(state, values)| {
                let change = match (values.first(), values.last()) {
                    (Some(first), Some(last)) => round2(last - first),
                    _ => f64::NAN,
                };
                TrendRow {
                    state: state.to_string(),
                    values: values.to_vec(),
                    change,
                }
            })
            .collect();

        scenarios.push(TrendScenario {
            code: code.as_str().to_string(),
            years: table.years().to_vec(),
            rows,
        });
    }

    Ok(Report::Trend {
        title: Question::OverallTrend.title().to_string(),
        scenarios,
    })
}

/// Questions 2/3, 5 and 6: per-state growth ratio between the first and
/// last projected year, sorted highest first, optionally grouped.
pub fn growth_ranking(set: &ScenarioSet, grouping: Option<Grouping>) -> BevResult<Report> {
    let question = match grouping {
        None => Question::GrowthRanking,
        Some(Grouping::EastWest) => Question::EastWest,
        Some(Grouping::UrbanRural) => Question::UrbanRural,
    };

    let mut scenarios = Vec::with_capacity(set.len());
    let mut footnote = String::new();

    for (code, table) in set.iter() {
        let (first_year, last_year) = year_span(code.as_str(), table)?;

        let mut rows: Vec<GrowthRow> = table
            .iter_rows()
            .filter(|&(state, _)| !grouping.is_some_and(|g| g.skips(state)))
            .map(|(state, values)| {
                let first = values.first().copied().unwrap_or(f64::NAN);
                let last = values.last().copied().unwrap_or(f64::NAN);
                GrowthRow {
                    state: state.to_string(),
                    first,
                    last,
                    growth_pct: round2(last / first * 100.0),
                    group: grouping.map(|g| g.label(state).to_string()),
                }
            })
            .collect();

        rows.sort_by(|a, b| {
            b.growth_pct
                .partial_cmp(&a.growth_pct)
                .unwrap_or(Ordering::Equal)
        });

        if footnote.is_empty() {
            footnote = ratio_footnote(&first_year, &last_year);
        }

        scenarios.push(GrowthScenario {
            code: code.as_str().to_string(),
            first_year,
            last_year,
            rows,
        });
    }

    Ok(Report::Growth {
        title: question.title().to_string(),
        footnote,
        scenarios,
    })
}

/// Question 4: the most and least populous state side by side.
pub fn extremes(set: &ScenarioSet) -> BevResult<Report> {
    let mut scenarios = Vec::with_capacity(set.len());

    for (code, table) in set.iter() {
        let (first_year, last_year) = year_span(code.as_str(), table)?;

        let mut rows = Vec::with_capacity(2);
        for state in [MOST_POPULOUS_STATE, LEAST_POPULOUS_STATE] {
            let values = table.row(state).ok_or_else(|| {
                BevError::Validation(format!(
                    "State '{}' not found in scenario {}",
                    state, code
                ))
            })?;
            let first = values.first().copied().unwrap_or(f64::NAN);
            let last = values.last().copied().unwrap_or(f64::NAN);
            rows.push(ExtremesRow {
                state: state.to_string(),
                first,
                last,
                change_pct: round2(100.0 * last / first - 100.0),
            });
        }

        scenarios.push(ExtremesScenario {
            code: code.as_str().to_string(),
            first_year,
            last_year,
            rows,
        });
    }

    Ok(Report::Extremes {
        title: Question::ExtremesComparison.title().to_string(),
        scenarios,
    })
}

fn year_span(code: &str, table: &ScenarioTable) -> BevResult<(String, String)> {
    match (table.first_year(), table.last_year()) {
        (Some(first), Some(last)) => Ok((first.to_string(), last.to_string())),
        _ => Err(BevError::Validation(format!(
            "Scenario {} has no year columns",
            code
        ))),
    }
}

fn ratio_footnote(first_year: &str, last_year: &str) -> String {
    format!(
        "A value of 90 means that the population in {} is 90% that in {}, \
         in other words a 10% decline over the projection horizon.",
        last_year, first_year
    )
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
