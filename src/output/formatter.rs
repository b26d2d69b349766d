use std::io::IsTerminal;

use owo_colors::OwoColorize;
use serde_json::json;

use crate::scoring::ScoreResult;

/// Label shown in place of a band when the probability cleared every ceiling.
pub const UNSCORED: &str = "unscored";

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format the verdict banner.
///
/// Tier colors follow the chance-of-default percentage: green below 45,
/// yellow for 45-60 inclusive, red above 60.
pub fn format_verdict(result: &ScoreResult, use_colors: bool) -> String {
    let chance = result.chance_of_default();
    let band = result.band.as_deref().unwrap_or(UNSCORED);
    let message = format!(
        "The chance that this customer will default is: {:.2}% / {}",
        chance, band
    );

    if !use_colors {
        return message;
    }

    if chance < 45.0 {
        format!("{}", message.green().bold())
    } else if chance <= 60.0 {
        format!("{}", message.yellow().bold())
    } else {
        format!("{}", message.red().bold())
    }
}

/// Format the per-attribute breakdown (for verbose mode): one line per
/// attribute showing the raw value and the weight it binned to, then the
/// intercept, linear predictor, and probability.
pub fn format_breakdown(result: &ScoreResult, use_colors: bool) -> String {
    let mut lines = Vec::with_capacity(result.breakdown.contributions.len() + 3);

    for contribution in &result.breakdown.contributions {
        let note = if contribution.matched { "" } else { " (no bin matched)" };
        if use_colors {
            let weight = format!("{:+}", contribution.weight);
            lines.push(format!(
                "  {}: {} -> {}{}",
                contribution.attribute.cyan(),
                contribution.raw,
                weight.bold(),
                note
            ));
        } else {
            lines.push(format!(
                "  {}: {} -> {:+}{}",
                contribution.attribute, contribution.raw, contribution.weight, note
            ));
        }
    }

    lines.push(format!("  intercept: {:+}", result.breakdown.intercept));
    lines.push(format!("  linear predictor: {:.4}", result.linear_predictor));
    lines.push(format!("  probability: {:.6}", result.probability));
    lines.join("\n")
}

/// Format a result as one tab-separated line for scripting.
/// Columns: chance_of_default, band, probability, linear_predictor
/// (no headers, no colors; band is `-` when unscored).
pub fn format_tsv(result: &ScoreResult) -> String {
    format!(
        "{:.2}\t{}\t{:.6}\t{:.4}",
        result.chance_of_default(),
        result.band.as_deref().unwrap_or("-"),
        result.probability,
        result.linear_predictor
    )
}

/// Format a result as pretty-printed JSON, band `null` when unscored.
pub fn format_json(result: &ScoreResult) -> String {
    let value = json!({
        "chance_of_default": result.chance_of_default(),
        "band": result.band,
        "probability": result.probability,
        "linear_predictor": result.linear_predictor,
        "breakdown": result.breakdown,
    });
    serde_json::to_string_pretty(&value).expect("Failed to serialize score result")
}
