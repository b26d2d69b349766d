use serde::{Deserialize, Serialize};

/// One score band: a probability ceiling and the label awarded at or below it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Band {
    /// Highest probability (inclusive) that still classifies into this band.
    pub ceiling: f64,
    pub label: String,
}

/// Ordered band table, ceilings ascending.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct BandTable {
    pub bands: Vec<Band>,
}

impl BandTable {
    pub fn new(bands: Vec<Band>) -> Self {
        Self { bands }
    }

    /// Map a probability to its band label.
    ///
    /// Returns the first band whose ceiling is >= the probability (the ceiling
    /// itself belongs to the band). A probability above every declared ceiling
    /// returns `None`, which callers must treat as "unscored" rather than as a
    /// valid band.
    pub fn classify(&self, probability: f64) -> Option<&str> {
        self.bands
            .iter()
            .find(|band| probability <= band.ceiling)
            .map(|band| band.label.as_str())
    }
}
