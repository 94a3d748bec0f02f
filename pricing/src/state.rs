/// Price signal recorded at the most recent settlement (or at seeding).
///
/// Two plain fields; the engine wraps this in `Option` so "never started"
/// is explicit rather than an all-zero sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceState {
    /// Price per unit, in the native currency's smallest unit.
    pub last_price: u128,

    /// Unix seconds at which `last_price` was recorded.
    pub last_timestamp_s: u64,
}
