//! Significant-figure rounding for displayed results

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Largest number of fractional digits a `Decimal` can hold.
const MAX_DECIMAL_SCALE: i32 = 28;

/// Significant digits needed to pin down any `f64` exactly.
const F64_SIG_FIGS: u32 = 17;

/// Round `value` to `sig_figs` significant figures, ties away from zero.
///
/// Zero, infinities and NaN are returned unchanged, as is everything when
/// `sig_figs` is `0` or at least 17.
///
/// ```
/// use mathexpr::cli::round_to_sig_figs;
///
/// assert_eq!(round_to_sig_figs(0.1 + 0.2, 12), 0.3);
/// assert_eq!(round_to_sig_figs(123456.0, 2), 120000.0);
/// assert_eq!(round_to_sig_figs(-0.0125, 2), -0.013);
/// ```
pub fn round_to_sig_figs(value: f64, sig_figs: u32) -> f64 {
    if value == 0.0 || !value.is_finite() || sig_figs == 0 || sig_figs >= F64_SIG_FIGS {
        return value;
    }

    let most_significant = value.abs().log10().floor() as i32;
    let round_to_digit = most_significant - sig_figs as i32 + 1;

    if -round_to_digit <= MAX_DECIMAL_SCALE {
        if let Some(rounded) = round_decimal(value, sig_figs) {
            return rounded;
        }
    }
    round_float(value, round_to_digit)
}

fn round_decimal(value: f64, sig_figs: u32) -> Option<f64> {
    Decimal::from_f64(value)?
        .round_sf_with_strategy(sig_figs, RoundingStrategy::MidpointAwayFromZero)?
        .to_f64()
}

/// Fallback for magnitudes `Decimal` cannot represent.
fn round_float(value: f64, round_to_digit: i32) -> f64 {
    let nearest = 10f64.powi(round_to_digit);
    if nearest == 0.0 || !nearest.is_finite() {
        return value;
    }
    let rounded = (value / nearest).round() * nearest;
    if rounded.is_finite() { rounded } else { value }
}
