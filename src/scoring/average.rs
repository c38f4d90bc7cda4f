/// Arithmetic mean of `values`, rounded to two decimal places.
///
/// Returns `None` for an empty slice: "no data" is distinct from a true
/// zero, and callers branch on the absence.
pub fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let total: f64 = values.iter().sum();
    Some(round2(total / values.len() as f64))
}

/// Round to two decimal places, reading the exact binary value.
///
/// A double sitting just below a decimal boundary rounds down even when the
/// exact-decimal result would round up (e.g. `(20 + 70.33) / 2` renders as
/// 45.16, not 45.17). Downstream consumers are calibrated against this, so
/// the formatter-based rounding is contract, not an implementation detail.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
