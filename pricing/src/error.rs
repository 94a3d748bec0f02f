use thiserror::Error;

/// Construction-time parameter validation failures.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("decay window must be non-zero")]
    ZeroDecayTime,

    #[error("ratio denominator must be non-zero")]
    ZeroDenominator,
}

/// Caller-visible settlement failures.
///
/// Every variant is total: a failed `purchase` mutates no state and moves
/// no funds.
#[derive(Error, Debug)]
pub enum PurchaseError {
    #[error("pricing engine has not been started")]
    NotStarted,

    #[error("purchase quantity must be non-zero")]
    ZeroQuantity,

    #[error("insufficient payment: required {required}, tendered {tendered}")]
    InsufficientPayment { required: u128, tendered: u128 },

    #[error("refund of {amount} could not be returned to the payer")]
    RefundFailed {
        amount: u128,
        #[source]
        source: anyhow::Error,
    },

    #[error("price arithmetic overflowed")]
    PriceOverflow,
}
