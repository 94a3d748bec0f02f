//! Configuration for one price stream.
//!
//! Parameters are a plain value object fixed at engine construction. The
//! embedding system decides them; the engine only rejects values that make
//! the arithmetic itself meaningless (zero denominators, an empty decay
//! window).

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Curve parameters supplied by the embedding system.
///
/// Recommendations (documented, deliberately not enforced; they shape the
/// curve rather than break it):
/// - `growth_num / growth_den > 1`, or demand produces no surge
/// - `starting_price >= bottom_price`, or the curve holds flat until the
///   first decay window closes
/// - `starting_price > 0`, so a seeded-but-unsold stream is never confused
///   with one that was priced at zero on purpose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveParams {
    /// Price per unit the stream is seeded with on `start`.
    pub starting_price: u128,

    /// Floor the price decays back to during idle periods.
    pub bottom_price: u128,

    /// Seconds over which the price decays fully from the last recorded
    /// price down to `bottom_price`.
    pub decay_time_s: u64,

    /// Numerator of the per-unit surge multiplier.
    pub growth_num: u128,

    /// Denominator of the per-unit surge multiplier. The conventional
    /// default ratio is 101/100 (one percent per unit sold).
    pub growth_den: u128,
}

impl CurveParams {
    pub fn new(
        starting_price: u128,
        bottom_price: u128,
        decay_time_s: u64,
        growth_num: u128,
        growth_den: u128,
    ) -> Result<Self, ConfigError> {
        let params = Self {
            starting_price,
            bottom_price,
            decay_time_s,
            growth_num,
            growth_den,
        };
        params.validate()?;
        Ok(params)
    }

    /// Re-check invariants on a deserialized value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decay_time_s == 0 {
            return Err(ConfigError::ZeroDecayTime);
        }
        if self.growth_den == 0 {
            return Err(ConfigError::ZeroDenominator);
        }
        Ok(())
    }
}

/// Settlement-time multiplier applied to the unit price, independent of the
/// surge/decay curve. Lets a caller layer a discount or premium on top of
/// the raw curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    num: u128,
    den: u128,
}

impl Scale {
    /// The 1/1 ratio used by the plain `purchase` form.
    pub const fn unit() -> Self {
        Self { num: 1, den: 1 }
    }

    pub fn new(num: u128, den: u128) -> Result<Self, ConfigError> {
        if den == 0 {
            return Err(ConfigError::ZeroDenominator);
        }
        Ok(Self { num, den })
    }

    pub fn num(&self) -> u128 {
        self.num
    }

    pub fn den(&self) -> u128 {
        self.den
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_decay_window() {
        assert_eq!(
            CurveParams::new(100, 10, 0, 101, 100),
            Err(ConfigError::ZeroDecayTime)
        );
    }

    #[test]
    fn rejects_zero_growth_denominator() {
        assert_eq!(
            CurveParams::new(100, 10, 86_400, 101, 0),
            Err(ConfigError::ZeroDenominator)
        );
    }

    #[test]
    fn accepts_degenerate_but_meaningful_curves() {
        // Zero starting price and a sub-unity growth ratio are the
        // embedder's business.
        assert!(CurveParams::new(0, 0, 1, 1, 2).is_ok());
    }

    #[test]
    fn scale_rejects_zero_denominator() {
        assert_eq!(Scale::new(1, 0), Err(ConfigError::ZeroDenominator));
        assert!(Scale::new(0, 1).is_ok());
    }
}
