//! Demand-driven surge applied to the stored price at settlement.
//!
//! Each unit sold multiplies the price by `growth_num / growth_den`, one
//! unit at a time:
//!
//! ```text
//! price ← floor(price · growth_num / growth_den)     (repeated `quantity` times)
//! ```
//!
//! The per-step truncation is load-bearing. Compounding is NOT equivalent to
//! `floor(price · (num/den)^quantity)`: each step discards its remainder
//! before the next is applied, and callers replaying the curve elsewhere
//! must do the same to reproduce identical stored prices. The loop is
//! O(quantity), which is why embedders bound the quantity of a single
//! settlement.

use crate::math::mul_div;

/// Apply the surge multiplier `quantity` times in sequence.
///
/// Returns `None` when `growth_den == 0` or any step overflows `u128`.
pub fn compound(price: u128, quantity: u64, growth_num: u128, growth_den: u128) -> Option<u128> {
    let mut out = price;

    for _ in 0..quantity {
        out = mul_div(out, growth_num, growth_den)?;
    }

    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_quantity_is_identity() {
        assert_eq!(compound(12_345, 0, 101, 100), Some(12_345));
    }

    #[test]
    fn single_step_truncates() {
        // 999 * 101 / 100 = 1008.99 -> 1008
        assert_eq!(compound(999, 1, 101, 100), Some(1_008));
    }

    #[test]
    fn per_step_truncation_differs_from_closed_form() {
        // Two steps from 999 at 101/100:
        //   step 1: floor(999 * 101 / 100)  = 1008
        //   step 2: floor(1008 * 101 / 100) = 1018
        // One-shot power: floor(999 * 101² / 100²) = floor(1019.09..) = 1019.
        assert_eq!(compound(999, 2, 101, 100), Some(1_018));
        assert_eq!(999u128 * 101 * 101 / (100 * 100), 1_019);
    }

    #[test]
    fn matches_reference_loop_for_batch_sizes() {
        let reference = |mut p: u128, q: u64| {
            for _ in 0..q {
                p = p * 101 / 100;
            }
            p
        };

        let start = 1_000_000_000_000_000_000u128;
        for q in [1u64, 7, 50] {
            assert_eq!(compound(start, q, 101, 100), Some(reference(start, q)));
        }
    }

    #[test]
    fn shrinking_ratio_decays_to_zero() {
        assert_eq!(compound(10, 5, 1, 2), Some(0)); // 10,5,2,1,0,0
    }

    #[test]
    fn zero_price_stays_zero() {
        assert_eq!(compound(0, 1_000, 101, 100), Some(0));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(compound(u128::MAX, 1, 2, 1), None);
    }

    #[test]
    fn zero_denominator_is_reported() {
        assert_eq!(compound(100, 1, 101, 0), None);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn unit_ratio_is_identity(price in 0..=u128::MAX, quantity in 0..200u64, den in 1..=u64::MAX as u128) {
            prop_assert_eq!(compound(price, quantity, den, den), Some(price));
        }

        #[test]
        fn non_increasing_when_ratio_below_one(
            price in 0..=u128::MAX,
            quantity in 0..200u64,
            num in 0..1_000u128,
            den in 1_000..2_000u128,
        ) {
            let out = compound(price, quantity, num, den).unwrap();
            prop_assert!(out <= price);
        }

        #[test]
        fn splitting_a_batch_compounds_identically(
            price in 0..=u64::MAX as u128,
            left in 0..100u64,
            right in 0..100u64,
        ) {
            // Buying q units in one settlement surges the same as two
            // back-to-back settlements at the same instant.
            let whole = compound(price, left + right, 101, 100).unwrap();
            let split = compound(compound(price, left, 101, 100).unwrap(), right, 101, 100).unwrap();
            prop_assert_eq!(whole, split);
        }
    }
}
