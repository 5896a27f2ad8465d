//! Fixed-precision rounding shared by every stage.

/// Decimals kept on raw gene scores.
pub const RAW_SCORE_DECIMALS: i32 = 4;
/// Decimals kept on normalized gene scores.
pub const NORMALIZED_SCORE_DECIMALS: i32 = 2;
/// Decimals kept on cosine similarities.
pub const SIMILARITY_DECIMALS: i32 = 6;
/// Decimals kept on trigger match scores.
pub const MATCH_SCORE_DECIMALS: i32 = 4;

/// Round to `decimals` places, sending exact ties to the even digit.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor).round_ties_even() / factor;
    // Keep -0.0 out of the output.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
