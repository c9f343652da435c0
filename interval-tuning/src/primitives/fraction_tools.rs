//! Tools for keeping ratios exact up to the point they are printed.

use fraction::{BigFraction, ToPrimitive};

/// Exact ratio of unbounded width, so shift chains of any length stay exact.
pub type Ratio = BigFraction;

/// 1/1, the neutral element of ratio chains.
pub fn unit() -> Ratio {
    Ratio::new(1u64, 1u64)
}

/// Inverted ratio. Zero becomes infinite.
///
/// # Example
///
/// ```
/// # use interval_tuning::primitives::{reciprocal, Ratio};
/// assert_eq!(reciprocal(Ratio::new(3u64, 2u64)), Ratio::new(2u64, 3u64));
/// assert_eq!(Ratio::new(18u64, 8u64).to_string(), "9/4");
/// ```
pub fn reciprocal(frac: Ratio) -> Ratio {
    unit() / frac
}

/// Convert ratio to float. Only done at the output boundary.
pub fn fraction_to_f64(frac: &Ratio) -> f64 {
    frac.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use crate::primitives::{fraction_to_f64, reciprocal, unit, Ratio};

    #[test]
    fn test_fraction_to_f64() {
        assert_eq!(fraction_to_f64(&Ratio::new(880u64, 2u64)), 440.0);
        assert_eq!(fraction_to_f64(&Ratio::new(1u64, 4u64)), 0.25);
        assert_eq!(fraction_to_f64(&Ratio::new(1760u64, 9u64)), 1760.0 / 9.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Ratio::new(16u64, 15u64).to_string(), "16/15");
        assert_eq!(Ratio::new(4u64, 2u64).to_string(), "2");
        assert_eq!(unit().to_string(), "1");
    }

    #[test]
    fn test_reciprocal() {
        assert_eq!(
            reciprocal(Ratio::new(16u64, 15u64)),
            Ratio::new(15u64, 16u64)
        );
        assert_eq!(reciprocal(unit()), unit());
    }

    #[test]
    fn test_wide_ratios() {
        let mut ratio = unit();
        for _ in 0..100 {
            ratio = ratio * Ratio::new(3u64, 2u64);
        }
        for _ in 0..100 {
            ratio = ratio * Ratio::new(2u64, 3u64);
        }
        assert_eq!(ratio, unit());
    }
}
