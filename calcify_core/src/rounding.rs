//! # Fixed-Precision Rounding
//!
//! Every numeric output field is rounded to an operation-specific decimal
//! precision before it is attached to a result: 2 decimals for currency and
//! ratios, 3 for fuel volume, 4 for physical quantities. Rounding is
//! idempotent: re-rounding an already-rounded value yields the same value.

/// Round to `decimals` decimal places, half away from zero.
///
/// Values too large for the scale-up to stay finite carry no fractional
/// part to begin with, so they are returned unchanged rather than
/// overflowed to infinity.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if scaled.is_finite() {
        scaled.round() / factor
    } else {
        value
    }
}

/// Round to 2 decimals (currency, ratios, percentages)
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Round to 3 decimals (fuel volume)
pub fn round3(value: f64) -> f64 {
    round_to(value, 3)
}

/// Round to 4 decimals (unit and temperature conversion)
pub fn round4(value: f64) -> f64 {
    round_to(value, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(8791.58872), 8791.59);
        assert_eq!(round2(1000.0), 1000.0);
        assert_eq!(round2(-0.005), -0.01);
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(0.123456), 0.1235);
        assert_eq!(round4(1000.0), 1000.0);
    }

    #[test]
    fn test_huge_values_pass_through() {
        assert_eq!(round2(f64::MAX), f64::MAX);
        assert_eq!(round4(1e308), 1e308);
    }

    #[test]
    fn test_idempotent() {
        for &v in &[8791.58872, 0.123456, -3.14159, 22.857142857, 1609.34] {
            for d in 2..=4 {
                let once = round_to(v, d);
                let twice = round_to(once, d);
                assert_eq!(once, twice, "re-rounding {v} at {d} decimals changed it");
            }
        }
    }
}
