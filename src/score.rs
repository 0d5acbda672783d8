use crate::danger::Warning;

/// Score of a pairing with no warnings.
pub const BASELINE_SCORE: i64 = 100;

/// Subtracts every warning's penalty from `baseline`.
///
/// The result is not clamped: stacked penalties can push it below zero.
pub fn aggregate(baseline: i64, warnings: &[Warning]) -> i64 {
    warnings
        .iter()
        .fold(baseline, |score, warning| score - i64::from(warning.penalty))
}
