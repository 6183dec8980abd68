use serde::{Deserialize, Serialize};

/// A historical figure offered as a mentor persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalFigure {
    pub name: String,
    /// Period and place the figure speaks from, e.g. "Renaissance Florence".
    pub era: String,
}

impl HistoricalFigure {
    pub fn new(name: impl Into<String>, era: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            era: era.into(),
        }
    }
}

/// A historical event offered as the seed of an alternate-history
/// simulation, together with what actually happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PivotEvent {
    pub title: String,
    pub year: i32,
    /// The real outcome, phrased as a single sentence.
    pub reality: String,
}

impl PivotEvent {
    pub fn new(title: impl Into<String>, year: i32, reality: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year,
            reality: reality.into(),
        }
    }
}
