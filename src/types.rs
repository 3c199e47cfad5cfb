use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

//==============================================================================
// Source layout constants
//==============================================================================

/// Number of German federal states; each scenario block spans this many rows.
pub const STATE_COUNT: usize = 16;

/// Length of a scenario identifier such as "G2L2W1".
pub const SCENARIO_CODE_LEN: usize = 6;

/// Marker substring in the label column that starts a scenario block.
pub const SCENARIO_MARKER: &str = "BEV";

/// Fixed name for the label column after import.
pub const STATE_COLUMN: &str = "States";

//==============================================================================
// Scenario codes and assumptions
//==============================================================================

/// Birth-rate assumption tag (children per woman).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthRate {
    G1,
    G2,
    G3,
}

impl BirthRate {
    pub fn describe(&self) -> &'static str {
        match self {
            BirthRate::G1 => "G1: Birth rate 1.44 children per woman.",
            BirthRate::G2 => "G2: Birth rate 1.55 children per woman.",
            BirthRate::G3 => "G3: Birth rate 1.7 children per woman.",
        }
    }
}

/// Life-expectancy assumption tag (expectancy at the projection horizon).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeExpectancy {
    L1,
    L2,
    L3,
}

impl LifeExpectancy {
    pub fn describe(&self) -> &'static str {
        match self {
            LifeExpectancy::L1 => {
                "L1: Life expectancy in 2070: 82.6 for men and 86.1 for women."
            }
            LifeExpectancy::L2 => {
                "L2: Life expectancy in 2070: 84.6 for men and 88.2 for women."
            }
            LifeExpectancy::L3 => {
                "L3: Life expectancy in 2070: 86.4 for men and 90.1 for women."
            }
        }
    }
}

/// Net-immigration assumption tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Immigration {
    W1,
    W2,
    W3,
}

impl Immigration {
    pub fn describe(&self) -> &'static str {
        match self {
            Immigration::W1 => {
                "W1: Immigration decreases from 1.1 million in 2022 to 150000 in 2033, constant thereafter."
            }
            Immigration::W2 => {
                "W2: Immigration decreases from 1.3 million in 2022 to 250000 in 2033, constant thereafter."
            }
            Immigration::W3 => {
                "W3: Immigration decreases from 1.5 million in 2022 to 350000 in 2033, constant thereafter."
            }
        }
    }
}

/// The three decoded assumptions behind a scenario code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assumptions {
    pub birth_rate: BirthRate,
    pub life_expectancy: LifeExpectancy,
    pub immigration: Immigration,
}

impl Assumptions {
    /// One line per assumption, in tag order.
    pub fn describe(&self) -> [&'static str; 3] {
        [
            self.birth_rate.describe(),
            self.life_expectancy.describe(),
            self.immigration.describe(),
        ]
    }
}

/// A scenario identifier, e.g. "G2L2W1".
///
/// Codes are carried as found in the source; decoding into [`Assumptions`]
/// is best-effort and only used for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ScenarioCode(String);

impl ScenarioCode {
    pub fn new<S: Into<String>>(code: S) -> Self {
        Self(code.into())
    }

    /// Derive the code from a marker-row label: the SCENARIO_CODE_LEN
    /// characters ending one position before the end of the label, with
    /// clamped slice semantics for short labels.
    pub fn from_marker_label(label: &str) -> Self {
        let chars: Vec<char> = label.chars().collect();
        let end = chars.len().saturating_sub(1);
        let start = end.saturating_sub(SCENARIO_CODE_LEN);
        Self(chars[start..end].iter().collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the assumption tags, scanning the code for each tag the way
    /// the source labels embed them. Returns None for opaque codes.
    pub fn assumptions(&self) -> Option<Assumptions> {
        let birth_rate = if self.0.contains("G1") {
            BirthRate::G1
        } else if self.0.contains("G2") {
            BirthRate::G2
        } else if self.0.contains("G3") {
            BirthRate::G3
        } else {
            return None;
        };
        let life_expectancy = if self.0.contains("L1") {
            LifeExpectancy::L1
        } else if self.0.contains("L2") {
            LifeExpectancy::L2
        } else if self.0.contains("L3") {
            LifeExpectancy::L3
        } else {
            return None;
        };
        let immigration = if self.0.contains("W1") {
            Immigration::W1
        } else if self.0.contains("W2") {
            Immigration::W2
        } else if self.0.contains("W3") {
            Immigration::W3
        } else {
            return None;
        };
        Some(Assumptions {
            birth_rate,
            life_expectancy,
            immigration,
        })
    }
}

impl fmt::Display for ScenarioCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//==============================================================================
// Scenario tables
//==============================================================================

/// One scenario's population figures: a row per state, a column per year.
///
/// Values are population counts in thousands. The table is not mutated after
/// construction; derived figures (growth ratios etc.) are computed by the
/// report layer on its own copies.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioTable {
    years: Vec<String>,
    states: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl ScenarioTable {
    pub fn new(years: Vec<String>) -> Self {
        Self {
            years,
            states: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Append one state row. Construction-time only.
    pub fn push_row(&mut self, state: String, row: Vec<f64>) {
        self.states.push(state);
        self.values.push(row);
    }

    /// Year column headers, truncated to 4 characters on import.
    pub fn years(&self) -> &[String] {
        &self.years
    }

    /// State names in source order.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    pub fn row_count(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn first_year(&self) -> Option<&str> {
        self.years.first().map(String::as_str)
    }

    pub fn last_year(&self) -> Option<&str> {
        self.years.last().map(String::as_str)
    }

    /// All values for one state, in year order.
    pub fn row(&self, state: &str) -> Option<&[f64]> {
        let idx = self.states.iter().position(|s| s == state)?;
        Some(&self.values[idx])
    }

    /// Value for one state and year.
    pub fn value(&self, state: &str, year: &str) -> Option<f64> {
        let col = self.years.iter().position(|y| y == year)?;
        self.row(state)?.get(col).copied()
    }

    /// Iterate rows as (state, values) pairs in source order.
    pub fn iter_rows(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.states
            .iter()
            .zip(self.values.iter())
            .map(|(s, v)| (s.as_str(), v.as_slice()))
    }
}

//==============================================================================
// Scenario set
//==============================================================================

/// Insertion-ordered mapping of scenario code to table.
///
/// Re-inserting an existing code replaces the table but keeps the code's
/// original position, matching the source-order contract for duplicate
/// markers.
#[derive(Debug, Clone, Default)]
pub struct ScenarioSet {
    order: Vec<ScenarioCode>,
    tables: HashMap<String, ScenarioTable>,
}

impl ScenarioSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: ScenarioCode, table: ScenarioTable) {
        if !self.tables.contains_key(code.as_str()) {
            self.order.push(code.clone());
        }
        self.tables.insert(code.as_str().to_string(), table);
    }

    pub fn get(&self, code: &str) -> Option<&ScenarioTable> {
        self.tables.get(code)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Scenario codes in the order their markers were found.
    pub fn codes(&self) -> &[ScenarioCode] {
        &self.order
    }

    /// Iterate (code, table) pairs in marker order.
    pub fn iter(&self) -> impl Iterator<Item = (&ScenarioCode, &ScenarioTable)> {
        self.order.iter().map(move |code| {
            let table = &self.tables[code.as_str()];
            (code, table)
        })
    }
}
