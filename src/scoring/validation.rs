use super::bins::BinTable;
use super::config::ScoringConfig;

/// Validate a scorecard at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if !config.intercept.is_finite() {
        errors.push("scorecard.intercept: must be finite".to_string());
    }

    let tables: [(&str, &BinTable); 8] = [
        ("annual_income", &config.annual_income),
        ("interest_rate", &config.interest_rate),
        ("delay_from_due_date", &config.delay_from_due_date),
        ("changed_credit_limit", &config.changed_credit_limit),
        ("num_credit_inquiries", &config.num_credit_inquiries),
        ("credit_mix", &config.credit_mix),
        ("outstanding_debt", &config.outstanding_debt),
        ("payment_of_min_amount", &config.payment_of_min_amount),
    ];

    for (name, table) in tables {
        validate_table(name, table, &mut errors);
    }

    validate_bands(config, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_table(name: &str, table: &BinTable, errors: &mut Vec<String>) {
    if table.bins.is_empty() {
        errors.push(format!("scorecard.{}: no bins declared", name));
        return;
    }

    for (i, bin) in table.bins.iter().enumerate() {
        if !bin.weight.is_finite() {
            errors.push(format!("scorecard.{}[{}].weight: must be finite", name, i));
        }
        if let (Some(lower), Some(upper)) = (bin.lower, bin.upper) {
            if lower >= upper {
                errors.push(format!(
                    "scorecard.{}[{}]: lower bound {} is not below upper bound {}",
                    name, i, lower, upper
                ));
            }
        }
    }

    // The table must cover the whole real line: open below, open above, and
    // adjacent bins meeting exactly.
    if table.bins.first().is_some_and(|bin| bin.lower.is_some()) {
        errors.push(format!("scorecard.{}: first bin must have no lower bound", name));
    }
    if table.bins.last().is_some_and(|bin| bin.upper.is_some()) {
        errors.push(format!("scorecard.{}: last bin must have no upper bound", name));
    }

    for (i, pair) in table.bins.windows(2).enumerate() {
        match (pair[0].upper, pair[1].lower) {
            (Some(upper), Some(lower)) if upper < lower => {
                errors.push(format!(
                    "scorecard.{}: gap between bins {} and {} - values in [{}, {}) bin to nothing",
                    name,
                    i,
                    i + 1,
                    upper,
                    lower
                ));
            }
            (Some(upper), Some(lower)) if upper > lower => {
                errors.push(format!(
                    "scorecard.{}: bins {} and {} overlap in [{}, {}) - the later bin wins",
                    name,
                    i,
                    i + 1,
                    lower,
                    upper
                ));
            }
            (Some(_), Some(_)) => {}
            _ => {
                errors.push(format!(
                    "scorecard.{}: bins {} and {} must meet at a finite boundary",
                    name,
                    i,
                    i + 1
                ));
            }
        }
    }
}

fn validate_bands(config: &ScoringConfig, errors: &mut Vec<String>) {
    let bands = &config.bands.bands;

    if bands.is_empty() {
        errors.push("scorecard.bands: no bands declared".to_string());
        return;
    }

    for (i, band) in bands.iter().enumerate() {
        if !(0.0..=1.0).contains(&band.ceiling) {
            errors.push(format!(
                "scorecard.bands[{}].ceiling: {} is outside [0, 1]",
                i, band.ceiling
            ));
        }
        if band.label.is_empty() {
            errors.push(format!("scorecard.bands[{}].label: must not be empty", i));
        }
    }

    for (i, pair) in bands.windows(2).enumerate() {
        if pair[0].ceiling >= pair[1].ceiling {
            errors.push(format!(
                "scorecard.bands[{}..{}]: ceilings must be strictly ascending",
                i,
                i + 1
            ));
        }
    }
}
