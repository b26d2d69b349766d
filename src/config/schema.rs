use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Alternate scorecard calibration. Absent means the built-in one.
    #[serde(default)]
    pub scorecard: Option<ScoringConfig>,
}
