pub mod bands;
pub mod bins;
pub mod config;
pub mod engine;
pub mod validation;

pub use bands::{Band, BandTable};
pub use bins::{Bin, BinTable};
pub use config::ScoringConfig;
pub use engine::{calculate_score, BinContribution, ScoreBreakdown, ScoreResult};
pub use validation::validate_scoring;
