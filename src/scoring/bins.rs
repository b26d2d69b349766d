use serde::{Deserialize, Serialize};

/// One scoring bin: a half-open value range `[lower, upper)` and the weight
/// an attribute contributes when its raw value falls inside.
///
/// `None` on either side means the range is unbounded there, so a table whose
/// first bin has no `lower` and whose last bin has no `upper` covers the whole
/// real line.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Bin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<f64>,

    /// Weight of Evidence score applied when the value matches this bin.
    pub weight: f64,
}

impl Bin {
    pub fn matches(&self, value: f64) -> bool {
        let above = self.lower.is_none_or(|lo| value >= lo);
        let below = self.upper.is_none_or(|hi| value < hi);
        above && below
    }
}

/// Ordered bin table for one applicant attribute.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct BinTable {
    pub bins: Vec<Bin>,
}

impl BinTable {
    pub fn new(bins: Vec<Bin>) -> Self {
        Self { bins }
    }

    /// Resolve a raw value to its bin weight.
    ///
    /// Every bin is evaluated in declaration order and each match overwrites
    /// the previous one, so when ranges overlap the LAST matching bin wins.
    /// Returns `None` when no bin claims the value; the engine then keeps the
    /// raw value as the weight, matching the original rule pipeline.
    pub fn weight_of(&self, value: f64) -> Option<f64> {
        let mut weight = None;
        for bin in &self.bins {
            if bin.matches(value) {
                weight = Some(bin.weight);
            }
        }
        weight
    }
}
