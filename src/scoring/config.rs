use serde::{Deserialize, Serialize};

use super::bands::{Band, BandTable};
use super::bins::{Bin, BinTable};

/// Main scoring configuration: one bin table per applicant attribute, the
/// regression intercept, and the probability band table.
///
/// `Default` carries the built-in calibration. Every field has a serde
/// default, so a scorecard file may override any subset and inherit the rest.
///
/// Example YAML:
/// ```yaml
/// scorecard:
///   intercept: 1.1129
///   credit_mix:
///     - { upper: 1, weight: -0.9121 }
///     - { lower: 1, weight: 0.7286 }
///   bands:
///     - { ceiling: 0.5, label: "D" }
///     - { ceiling: 1.0, label: "A" }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Linear-predictor intercept added before the bin weights.
    #[serde(default = "default_intercept")]
    pub intercept: f64,

    #[serde(default = "default_annual_income")]
    pub annual_income: BinTable,

    #[serde(default = "default_interest_rate")]
    pub interest_rate: BinTable,

    #[serde(default = "default_delay_from_due_date")]
    pub delay_from_due_date: BinTable,

    #[serde(default = "default_changed_credit_limit")]
    pub changed_credit_limit: BinTable,

    #[serde(default = "default_num_credit_inquiries")]
    pub num_credit_inquiries: BinTable,

    #[serde(default = "default_credit_mix")]
    pub credit_mix: BinTable,

    #[serde(default = "default_outstanding_debt")]
    pub outstanding_debt: BinTable,

    #[serde(default = "default_payment_of_min_amount")]
    pub payment_of_min_amount: BinTable,

    /// Probability ceilings mapped to band labels, ascending.
    #[serde(default = "default_bands")]
    pub bands: BandTable,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            intercept: default_intercept(),
            annual_income: default_annual_income(),
            interest_rate: default_interest_rate(),
            delay_from_due_date: default_delay_from_due_date(),
            changed_credit_limit: default_changed_credit_limit(),
            num_credit_inquiries: default_num_credit_inquiries(),
            credit_mix: default_credit_mix(),
            outstanding_debt: default_outstanding_debt(),
            payment_of_min_amount: default_payment_of_min_amount(),
            bands: default_bands(),
        }
    }
}

// Built-in calibration. Weights are the regression coefficient times each
// bin's Weight of Evidence; a higher sum means a lower chance of default.

fn default_intercept() -> f64 {
    1.1129
}

fn default_annual_income() -> BinTable {
    BinTable::new(vec![
        Bin { lower: None, upper: Some(19114.12), weight: -0.6097 },
        Bin { lower: Some(19114.12), upper: Some(37578.61), weight: 0.0801 },
        Bin { lower: Some(37578.61), upper: None, weight: 0.8215 },
    ])
}

fn default_interest_rate() -> BinTable {
    BinTable::new(vec![
        Bin { lower: None, upper: Some(8.0), weight: 0.9610 },
        Bin { lower: Some(8.0), upper: Some(20.0), weight: -0.0804 },
        Bin { lower: Some(20.0), upper: None, weight: -1.0998 },
    ])
}

fn default_delay_from_due_date() -> BinTable {
    BinTable::new(vec![
        Bin { lower: None, upper: Some(15.0), weight: 0.7847 },
        Bin { lower: Some(15.0), upper: Some(28.0), weight: -0.1663 },
        Bin { lower: Some(28.0), upper: None, weight: -1.0353 },
    ])
}

fn default_changed_credit_limit() -> BinTable {
    BinTable::new(vec![
        Bin { lower: None, upper: Some(6.5), weight: 0.4704 },
        Bin { lower: Some(6.5), upper: Some(14.2), weight: -0.0520 },
        Bin { lower: Some(14.2), upper: None, weight: -0.6555 },
    ])
}

fn default_num_credit_inquiries() -> BinTable {
    BinTable::new(vec![
        Bin { lower: None, upper: Some(4.0), weight: 0.8060 },
        Bin { lower: Some(4.0), upper: Some(8.0), weight: -0.1173 },
        Bin { lower: Some(8.0), upper: None, weight: -0.9542 },
    ])
}

fn default_credit_mix() -> BinTable {
    BinTable::new(vec![
        Bin { lower: None, upper: Some(1.0), weight: -0.9121 },
        Bin { lower: Some(1.0), upper: None, weight: 0.7286 },
    ])
}

fn default_outstanding_debt() -> BinTable {
    BinTable::new(vec![
        Bin { lower: None, upper: Some(566.07), weight: 0.9862 },
        Bin { lower: Some(566.07), upper: Some(1497.16), weight: 0.1522 },
        Bin { lower: Some(1497.16), upper: None, weight: -1.1318 },
    ])
}

fn default_payment_of_min_amount() -> BinTable {
    BinTable::new(vec![
        Bin { lower: None, upper: Some(1.0), weight: 0.5208 },
        Bin { lower: Some(1.0), upper: None, weight: -0.3981 },
    ])
}

fn default_bands() -> BandTable {
    BandTable::new(vec![
        Band { ceiling: 0.2171, label: "E".to_string() },
        Band { ceiling: 0.4401, label: "D".to_string() },
        Band { ceiling: 0.6678, label: "C".to_string() },
        Band { ceiling: 0.8551, label: "B".to_string() },
        Band { ceiling: 0.9767, label: "A".to_string() },
    ])
}
