//! Money and rating rounding using rust_decimal
//!
//! Values are stored as `f64`; arithmetic and rounding go through `Decimal`.

use rust_decimal::prelude::*;

/// 2 decimal places, half away from zero
const DECIMAL_PLACES: u32 = 2;

#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round an `f64` amount or average to 2 decimal places
#[inline]
pub fn round2(value: f64) -> f64 {
    to_f64(to_decimal(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(4.0), 4.0);
        assert_eq!(round2(11.0 / 3.0), 3.67);
        assert_eq!(round2(10.0 / 3.0), 3.33);
        assert_eq!(round2(19.999), 20.0);
        assert_eq!(round2(0.125), 0.13);
    }
}
