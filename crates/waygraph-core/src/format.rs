//! Number formatting for human-readable output

/// Render a weight or distance for human output.
///
/// Rounds to three decimals and drops trailing zeros, so sums such as
/// `38.9 + 47.8` print as `86.7`. Infinite distances print as `inf`.
pub fn format_weight(weight: f64) -> String {
    if weight.is_infinite() {
        return "inf".to_string();
    }
    let fixed = format!("{:.3}", weight);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}
