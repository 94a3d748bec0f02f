//! Widened integer helpers shared by the decay and surge computations.

use uint::construct_uint;

construct_uint! {
    /// 256-bit integer used for overflow-free intermediate math.
    pub struct U256(4);
}

/// `floor(a * b / den)` computed through a 256-bit intermediate so the
/// product never wraps.
///
/// Returns `None` when `den == 0` or the quotient does not fit in `u128`.
pub fn mul_div(a: u128, b: u128, den: u128) -> Option<u128> {
    if den == 0 {
        return None;
    }

    let q = U256::from(a) * U256::from(b) / U256::from(den);
    narrow(q)
}

/// Narrow a 256-bit value back to `u128`, or `None` if it doesn't fit.
pub(crate) fn narrow(v: U256) -> Option<u128> {
    if v.bits() <= 128 {
        Some(v.low_u128())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(mul_div(7, 3, 2), Some(10)); // 21 / 2
        assert_eq!(mul_div(1, 1, 3), Some(0));
        assert_eq!(mul_div(100, 101, 100), Some(101));
    }

    #[test]
    fn zero_denominator_is_none() {
        assert_eq!(mul_div(1, 1, 0), None);
    }

    #[test]
    fn intermediate_product_may_exceed_u128() {
        // a * b wraps u128, but the quotient fits.
        let a = u128::MAX;
        assert_eq!(mul_div(a, 4, 8), Some(a / 2));
    }

    #[test]
    fn oversized_quotient_is_none() {
        assert_eq!(mul_div(u128::MAX, 3, 2), None);
    }

    #[test]
    fn identity_ratio() {
        assert_eq!(mul_div(u128::MAX, 5, 5), Some(u128::MAX));
    }
}
