//! Exact integer helpers shared by the strategies.
//!
//! Range decisions never round: values are kept as integer ratios and
//! compared by cross multiplication. [`Extended`] adds the two signed
//! infinities to the rationals so that poles can take part in the same
//! comparisons as finite bounds.

use num_integer::Integer;

mod extended;

pub use extended::Extended;

/// Divides every value by the greatest common divisor of their magnitudes.
///
/// Works on magnitudes so that `i64::MIN` never needs to be negated. An
/// all-zero input is returned unchanged.
pub fn reduce_by_gcd<const N: usize>(values: [i64; N]) -> [i64; N] {
    let divisor = values
        .iter()
        .fold(0u64, |acc, value| acc.gcd(&value.unsigned_abs()));
    if divisor <= 1 {
        return values;
    }
    // |value / divisor| <= 2^62 whenever divisor >= 2, so the narrowing is exact.
    values.map(|value| (i128::from(value) / i128::from(divisor)) as i64)
}
