//! Pure arithmetic for the adaptive unit-pricing curve.
//
//  This crate is deliberately pure: no async, no IO, no stored state.
//  The stateful engine lives in the `pricing` crate.

pub mod decay;
pub mod math;
pub mod surge;
