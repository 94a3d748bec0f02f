//! The settlement engine: one price stream, five operations.
//!
//! Design principles:
//! - **Single writer**: one async mutex serializes every `start`/`purchase`
//!   against the stored state. Two racing purchases can never both settle at
//!   the pre-surge price.
//! - **All-or-nothing**: validation, settlement arithmetic and the refund
//!   all happen before the state commit. Any failure leaves the stored
//!   price and timestamp untouched.
//! - **Flat batch pricing**: every unit in a purchase is charged the price
//!   read at the instant of the call. Buyers are not penalized for
//!   batching; the surge lands on the *next* purchase.
//!
//! This engine NEVER:
//! - issues items or tracks per-buyer allocation
//! - holds funds (excess payment is routed back through [`ValueTransfer`])
//! - reads a clock (`now_s` is supplied by the caller and injectable in
//!   tests)

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};

use curve::{decay, math, surge};

use crate::error::PurchaseError;
use crate::params::{CurveParams, Scale};
use crate::state::PriceState;
use crate::transfer::ValueTransfer;

pub struct PricingEngine<T: ValueTransfer> {
    params: CurveParams,
    transfer: Arc<T>,
    state: Mutex<Option<PriceState>>,
}

impl<T: ValueTransfer> PricingEngine<T> {
    /// A fresh engine is unstarted: reads return zero and purchases fail
    /// until [`start`](Self::start) seeds the curve.
    pub fn new(params: CurveParams, transfer: Arc<T>) -> Self {
        Self {
            params,
            transfer,
            state: Mutex::new(None),
        }
    }

    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    /// Seed the curve at `starting_price`. Calling it again simply
    /// re-seeds; start-once semantics belong to the embedder.
    pub async fn start(&self, now_s: u64) {
        let mut guard = self.state.lock().await;
        *guard = Some(PriceState {
            last_price: self.params.starting_price,
            last_timestamp_s: now_s,
        });

        info!(
            starting_price = self.params.starting_price,
            now_s, "price stream seeded"
        );
    }

    /// Price recorded at the most recent settlement; zero if unstarted.
    pub async fn last_price(&self) -> u128 {
        self.state.lock().await.map_or(0, |s| s.last_price)
    }

    /// Unix seconds of the most recent settlement; zero if unstarted.
    pub async fn last_timestamp(&self) -> u64 {
        self.state.lock().await.map_or(0, |s| s.last_timestamp_s)
    }

    /// Decay-projected price per unit at `now_s`.
    ///
    /// Pure read over a consistent snapshot; never fails. An unstarted
    /// engine reports zero, a fully decayed one reports the floor.
    pub async fn current_price(&self, now_s: u64) -> u128 {
        let snapshot = *self.state.lock().await;
        self.project(snapshot, now_s)
    }

    /// Settle a purchase of `quantity` units at the raw curve price.
    pub async fn purchase(
        &self,
        quantity: u64,
        tendered: u128,
        payer: &str,
        now_s: u64,
    ) -> Result<(), PurchaseError> {
        self.purchase_scaled(quantity, Scale::unit(), tendered, payer, now_s)
            .await
    }

    /// Settle a purchase of `quantity` units with a price scale applied.
    ///
    /// Order of operations:
    /// 1. project the current price (charged flat for the whole batch)
    /// 2. `required = quantity × floor(price × scale)`: the scale division
    ///    truncates *before* the quantity multiplication
    /// 3. reject if `tendered < required`
    /// 4. compound the surge multiplier once per unit
    /// 5. refund `tendered − required` through the transfer capability
    /// 6. commit `(surged_price, now_s)`
    ///
    /// The mutex is held across the refund await so the read at step 1 and
    /// the write at step 6 are atomic with respect to other calls.
    pub async fn purchase_scaled(
        &self,
        quantity: u64,
        scale: Scale,
        tendered: u128,
        payer: &str,
        now_s: u64,
    ) -> Result<(), PurchaseError> {
        let mut guard = self.state.lock().await;

        let state = (*guard).ok_or(PurchaseError::NotStarted)?;

        if quantity == 0 {
            return Err(PurchaseError::ZeroQuantity);
        }

        let price = self.project(Some(state), now_s);

        let unit_price = math::mul_div(price, scale.num(), scale.den())
            .ok_or(PurchaseError::PriceOverflow)?;
        let required = unit_price
            .checked_mul(u128::from(quantity))
            .ok_or(PurchaseError::PriceOverflow)?;

        if tendered < required {
            warn!(quantity, required, tendered, "purchase rejected: underpaid");
            return Err(PurchaseError::InsufficientPayment { required, tendered });
        }

        // Surge is computed before any funds move so an overflow aborts
        // with nothing half-applied.
        let surged = surge::compound(price, quantity, self.params.growth_num, self.params.growth_den)
            .ok_or(PurchaseError::PriceOverflow)?;

        let excess = tendered - required;
        if excess > 0 {
            self.transfer
                .transfer(payer, excess)
                .await
                .map_err(|source| {
                    warn!(payer, amount = excess, "refund failed; settlement aborted");
                    PurchaseError::RefundFailed {
                        amount: excess,
                        source,
                    }
                })?;
        }

        *guard = Some(PriceState {
            last_price: surged,
            last_timestamp_s: now_s,
        });

        info!(
            quantity,
            unit_price,
            required,
            refunded = excess,
            new_price = surged,
            "purchase settled"
        );

        Ok(())
    }

    fn project(&self, state: Option<PriceState>, now_s: u64) -> u128 {
        match state {
            None => 0,
            Some(s) => decay::project(
                s.last_price,
                self.params.bottom_price,
                now_s.saturating_sub(s.last_timestamp_s),
                self.params.decay_time_s,
            ),
        }
    }
}
