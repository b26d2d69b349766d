use serde::Serialize;

use super::bins::BinTable;
use super::config::ScoringConfig;
use crate::applicant::Applicant;

/// How one attribute entered the linear predictor.
#[derive(Debug, Clone, Serialize)]
pub struct BinContribution {
    pub attribute: &'static str,
    pub raw: f64,
    /// Weight the attribute contributed to the linear predictor.
    pub weight: f64,
    /// False when no bin claimed the raw value and it passed through as-is.
    pub matched: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    pub intercept: f64,
    pub contributions: Vec<BinContribution>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub linear_predictor: f64,
    /// Logistic output in [0, 1]; higher means less likely to default.
    pub probability: f64,
    /// Band label, or `None` when the probability clears every ceiling.
    pub band: Option<String>,
    pub breakdown: ScoreBreakdown,
}

impl ScoreResult {
    /// Chance of default as the percentage the model reports to callers: the
    /// complement of the logistic output scaled to 0..100.
    pub fn chance_of_default(&self) -> f64 {
        (self.probability * 100.0 - 100.0).abs()
    }
}

/// Score one applicant against a scorecard.
///
/// Pure function over the immutable config: bins each attribute, sums the
/// intercept and bin weights into the linear predictor, squashes it through
/// the logistic, and looks up the band.
pub fn calculate_score(applicant: &Applicant, config: &ScoringConfig) -> ScoreResult {
    let attributes: [(&'static str, &BinTable, f64); 8] = [
        ("annual_income", &config.annual_income, applicant.annual_income),
        ("interest_rate", &config.interest_rate, applicant.interest_rate),
        (
            "delay_from_due_date",
            &config.delay_from_due_date,
            applicant.delay_from_due_date,
        ),
        (
            "changed_credit_limit",
            &config.changed_credit_limit,
            applicant.changed_credit_limit,
        ),
        (
            "num_credit_inquiries",
            &config.num_credit_inquiries,
            applicant.num_credit_inquiries,
        ),
        ("credit_mix", &config.credit_mix, applicant.credit_mix),
        ("outstanding_debt", &config.outstanding_debt, applicant.outstanding_debt),
        (
            "payment_of_min_amount",
            &config.payment_of_min_amount,
            applicant.payment_of_min_amount,
        ),
    ];

    let mut linear_predictor = config.intercept;
    let mut contributions = Vec::with_capacity(attributes.len());

    for (attribute, table, raw) in attributes {
        let binned = table.weight_of(raw);
        // An unclaimed value keeps its raw magnitude, matching the original
        // overwrite pipeline that leaves the column untouched on no match.
        let weight = binned.unwrap_or(raw);
        linear_predictor += weight;
        contributions.push(BinContribution {
            attribute,
            raw,
            weight,
            matched: binned.is_some(),
        });
    }

    let probability = logistic(linear_predictor);
    let band = config.bands.classify(probability).map(str::to_string);

    ScoreResult {
        linear_predictor,
        probability,
        band,
        breakdown: ScoreBreakdown {
            intercept: config.intercept,
            contributions,
        },
    }
}

/// Numerically stable logistic: saturates toward 0 and 1 at the extremes
/// instead of overflowing into inf/NaN.
fn logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::bins::Bin;

    fn worst_applicant() -> Applicant {
        Applicant {
            annual_income: 12_000.0,
            interest_rate: 24.0,
            delay_from_due_date: 45.0,
            changed_credit_limit: 18.0,
            num_credit_inquiries: 11.0,
            credit_mix: 0.0,
            outstanding_debt: 2_600.0,
            payment_of_min_amount: 1.0,
        }
    }

    fn best_applicant() -> Applicant {
        Applicant {
            annual_income: 50_000.0,
            interest_rate: 2.0,
            delay_from_due_date: 0.0,
            changed_credit_limit: 1.0,
            num_credit_inquiries: 0.0,
            credit_mix: 1.0,
            outstanding_debt: 100.0,
            payment_of_min_amount: 0.0,
        }
    }

    #[test]
    fn test_worst_bin_applicant_golden() {
        let config = ScoringConfig::default();
        let result = calculate_score(&worst_applicant(), &config);

        assert!((result.linear_predictor - -5.6836).abs() < 1e-9);
        assert!((result.probability - 0.0033897622).abs() < 1e-6);
        assert!((result.chance_of_default() - 99.661024).abs() < 1e-4);
        assert_eq!(result.band.as_deref(), Some("E"));
    }

    #[test]
    fn test_best_bin_applicant_golden() {
        let config = ScoringConfig::default();
        let result = calculate_score(&best_applicant(), &config);

        assert!((result.linear_predictor - 7.1921).abs() < 1e-9);
        assert!((result.probability - 0.9992480586).abs() < 1e-6);
        assert!((result.chance_of_default() - 0.075194).abs() < 1e-4);
        // Clears the top ceiling, so no band.
        assert_eq!(result.band, None);
    }

    #[test]
    fn test_mixed_applicant_golden() {
        let config = ScoringConfig::default();
        let applicant = Applicant {
            annual_income: 25_000.0,
            interest_rate: 12.0,
            delay_from_due_date: 20.0,
            changed_credit_limit: 10.0,
            num_credit_inquiries: 5.0,
            credit_mix: 0.0,
            outstanding_debt: 800.0,
            payment_of_min_amount: 1.0,
        };
        let result = calculate_score(&applicant, &config);

        assert!((result.linear_predictor - -0.3810).abs() < 1e-9);
        assert!((result.probability - 0.4058857319).abs() < 1e-6);
        assert!((result.chance_of_default() - 59.411427).abs() < 1e-4);
        assert_eq!(result.band.as_deref(), Some("D"));
    }

    #[test]
    fn test_linear_predictor_is_intercept_plus_weights() {
        let config = ScoringConfig::default();
        let result = calculate_score(&worst_applicant(), &config);

        let mut expected = result.breakdown.intercept;
        for contribution in &result.breakdown.contributions {
            expected += contribution.weight;
        }
        assert_eq!(result.linear_predictor, expected);
    }

    #[test]
    fn test_every_attribute_contributes_a_declared_weight() {
        let config = ScoringConfig::default();
        let result = calculate_score(&worst_applicant(), &config);

        assert_eq!(result.breakdown.contributions.len(), 8);
        for contribution in &result.breakdown.contributions {
            assert!(contribution.matched, "{} fell through", contribution.attribute);
        }
    }

    #[test]
    fn test_binary_attributes_at_zero_and_one() {
        let config = ScoringConfig::default();

        let mut applicant = best_applicant();
        applicant.credit_mix = 0.0;
        applicant.payment_of_min_amount = 1.0;
        let result = calculate_score(&applicant, &config);

        let by_name = |name: &str| {
            result
                .breakdown
                .contributions
                .iter()
                .find(|c| c.attribute == name)
                .unwrap()
                .weight
        };
        assert_eq!(by_name("credit_mix"), -0.9121);
        assert_eq!(by_name("payment_of_min_amount"), -0.3981);

        applicant.credit_mix = 1.0;
        applicant.payment_of_min_amount = 0.0;
        let result = calculate_score(&applicant, &config);
        let by_name = |name: &str| {
            result
                .breakdown
                .contributions
                .iter()
                .find(|c| c.attribute == name)
                .unwrap()
                .weight
        };
        assert_eq!(by_name("credit_mix"), 0.7286);
        assert_eq!(by_name("payment_of_min_amount"), 0.5208);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let config = ScoringConfig::default();
        let applicant = worst_applicant();

        let first = calculate_score(&applicant, &config);
        let second = calculate_score(&applicant, &config);

        assert_eq!(first.linear_predictor.to_bits(), second.linear_predictor.to_bits());
        assert_eq!(first.probability.to_bits(), second.probability.to_bits());
        assert_eq!(first.band, second.band);
    }

    #[test]
    fn test_unclaimed_value_passes_through_raw() {
        // A table with a hole: values in [5, 10) match nothing and keep their
        // raw magnitude, like the original overwrite pipeline.
        let mut config = ScoringConfig::default();
        config.num_credit_inquiries = BinTable::new(vec![
            Bin { lower: None, upper: Some(5.0), weight: 0.1 },
            Bin { lower: Some(10.0), upper: None, weight: -0.1 },
        ]);

        let mut applicant = best_applicant();
        applicant.num_credit_inquiries = 7.0;
        let result = calculate_score(&applicant, &config);

        let contribution = result
            .breakdown
            .contributions
            .iter()
            .find(|c| c.attribute == "num_credit_inquiries")
            .unwrap();
        assert!(!contribution.matched);
        assert_eq!(contribution.weight, 7.0);
    }

    #[test]
    fn test_logistic_midpoint_and_range() {
        assert_eq!(logistic(0.0), 0.5);
        let p = logistic(-30.0);
        assert!(p > 0.0 && p < 1.0);
        let p = logistic(30.0);
        assert!(p > 0.0 && p < 1.0);
    }

    #[test]
    fn test_logistic_saturates_without_overflow() {
        assert_eq!(logistic(-800.0), 0.0);
        assert_eq!(logistic(800.0), 1.0);
        assert!(logistic(-800.0).is_finite());
        assert!(logistic(800.0).is_finite());
    }

    #[test]
    fn test_chance_of_default_is_complement_percentage() {
        let config = ScoringConfig::default();
        let result = calculate_score(&best_applicant(), &config);
        let expected = (1.0 - result.probability) * 100.0;
        assert!((result.chance_of_default() - expected).abs() < 1e-12);
    }
}
