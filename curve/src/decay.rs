//! Quadratic ease-out decay of a stored price toward a floor.
//!
//! ## What it answers
//! > "Given the price recorded at the last sale, what is the fair price now?"
//!
//! ## Decay law
//!
//! With `Δt` the seconds since the last recorded price (clamped to the decay
//! window `D`) and `Δp = last_price − bottom_price`:
//!
//! ```text
//! p         = Δp · Δt / D              (truncating)
//! price(Δt) = last_price − 2p + p · Δt / D
//! ```
//!
//! which is the discrete form of `last_price − Δp·(2f − f²)` for `f = Δt/D`.
//! The curve leaves `last_price` steeply and flattens as it approaches the
//! floor, so a burst of demand is forgotten quickly at first and the floor
//! is never overshot.
//!
//! ## Boundary guard
//!
//! Once `Δt` clamps to `D` the function returns `bottom_price` exactly.
//! The equality guard is required: recomputing the polynomial at the
//! boundary can leave a one-unit truncation remainder.
//!
//! ## Design properties
//! - Deterministic, integer-only
//! - Never fails: degenerate inputs degrade to the floor or the stored price
//! - Result is always within `[bottom_price, last_price]` when
//!   `last_price ≥ bottom_price`

use crate::math::U256;

/// Project the stored price forward by `elapsed_s` seconds of decay.
pub fn project(last_price: u128, bottom_price: u128, elapsed_s: u64, decay_time_s: u64) -> u128 {
    let dt = elapsed_s.min(decay_time_s);

    if dt == decay_time_s {
        return bottom_price;
    }

    let delta = last_price.saturating_sub(bottom_price);
    if delta == 0 {
        return last_price;
    }

    let dt = U256::from(dt);
    let window = U256::from(decay_time_s);

    let p = U256::from(delta) * dt / window;
    let q = p * dt / window;

    // Grouped as (last + q) − 2p: the sum is taken before the subtraction
    // because 2p alone may exceed last_price late in the window. The result
    // is bounded by [bottom_price, last_price], so it always fits u128.
    let out = U256::from(last_price) + q - p - p;

    debug_assert!(out.bits() <= 128);
    out.low_u128()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn bounded_by_floor_and_stored_price(
            last in 0..=u128::MAX,
            bottom in 0..=u128::MAX,
            elapsed in 0..=u64::MAX,
            window in 1..=u64::MAX,
        ) {
            prop_assume!(bottom <= last);
            let out = project(last, bottom, elapsed, window);
            prop_assert!(out >= bottom, "fell below the floor: {out} < {bottom}");
            prop_assert!(out <= last, "rose above the stored price: {out} > {last}");
        }

        #[test]
        fn zero_delta_is_a_fixed_point(
            price in 0..=u128::MAX,
            elapsed in 0..=u64::MAX,
            window in 1..=u64::MAX,
        ) {
            prop_assume!(elapsed < window);
            prop_assert_eq!(project(price, price, elapsed, window), price);
        }

        #[test]
        fn exact_floor_at_and_past_the_window(
            last in 0..=u128::MAX,
            bottom in 0..=u128::MAX,
            past in 0..=u64::MAX,
            window in 1..=u64::MAX,
        ) {
            let elapsed = window.saturating_add(past);
            prop_assert_eq!(project(last, bottom, elapsed, window), bottom);
        }
    }
}
