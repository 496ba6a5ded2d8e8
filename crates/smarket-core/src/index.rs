//! Aggregate index math.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

/// Decimal places kept on a computed index value.
pub const INDEX_SCALE: u32 = 8;

/// Geometric mean of `values`.
///
/// An empty slice gives `0`, and so does any zero member. The mean is taken
/// in log space so that the running product cannot overflow, then rounded to
/// [`INDEX_SCALE`] places.
pub fn geometric_mean(values: &[Decimal]) -> Decimal {
    match values {
        [] => Decimal::ZERO,
        [single] => *single,
        _ if values.iter().any(|value| value.is_zero()) => Decimal::ZERO,
        _ => {
            let mut log_sum = 0.0_f64;
            for value in values {
                match value.to_f64() {
                    Some(value) if value > 0.0 => log_sum += value.ln(),
                    _ => return Decimal::ZERO,
                }
            }

            let mean = (log_sum / values.len() as f64).exp();
            Decimal::from_f64(mean)
                .map(|mean| mean.round_dp(INDEX_SCALE))
                .unwrap_or(Decimal::ZERO)
        }
    }
}
