//! Deterministic bursty-demand replay against one price stream.
//!
//! Each burst fires its buyers concurrently at the same instant, which
//! exercises the engine's serialization: buyers settle one after another
//! at compounding prices, then the curve decays through the idle gap.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{info, warn};

use curve::surge;
use pricing::engine::PricingEngine;

use crate::config::SaleConfig;
use crate::treasury::InMemoryTreasury;

#[derive(Debug, Clone, Copy)]
pub struct ScenarioReport {
    pub settled: u32,
    pub rejected: u32,
    pub final_price: u128,
}

pub async fn run(
    engine: Arc<PricingEngine<InMemoryTreasury>>,
    treasury: InMemoryTreasury,
    cfg: &SaleConfig,
    max_quantity_per_purchase: u64,
    t0: u64,
) -> anyhow::Result<ScenarioReport> {
    engine.start(t0).await;

    let scenario = &cfg.scenario;
    let quantity = scenario.quantity_per_buyer.min(max_quantity_per_purchase);
    if quantity < scenario.quantity_per_buyer {
        warn!(
            asked = scenario.quantity_per_buyer,
            clamped = quantity,
            "per-purchase quantity capped by this embedding"
        );
    }

    let mut settled = 0u32;
    let mut rejected = 0u32;

    for burst in 0..scenario.bursts {
        let at = t0 + u64::from(burst) * scenario.idle_gap_s;

        let opening = engine.current_price(at).await;
        info!(burst, unit_price = opening, "burst opens");

        // Buyers race; whoever settles last pays the most. Fund each with
        // the worst-case batch cost so ordering never starves a buyer, and
        // let the engine refund the difference.
        let worst_unit = surge::compound(
            opening,
            quantity.saturating_mul(u64::from(scenario.buyers_per_burst.saturating_sub(1))),
            cfg.curve.growth_num,
            cfg.curve.growth_den,
        )
        .ok_or_else(|| anyhow::anyhow!("worst-case unit price overflowed"))?;
        let tendered = worst_unit
            .checked_mul(u128::from(quantity))
            .ok_or_else(|| anyhow::anyhow!("worst-case batch cost overflowed"))?;

        let buys = (0..scenario.buyers_per_burst).map(|b| {
            let engine = engine.clone();
            let treasury = treasury.clone();
            let payer = format!("buyer-{burst}-{b}");

            async move {
                treasury.deposit(&payer, tendered).await;
                treasury.withdraw(&payer, tendered).await?;

                engine.purchase(quantity, tendered, &payer, at).await?;
                anyhow::Ok(payer)
            }
        });

        for result in join_all(buys).await {
            match result {
                Ok(payer) => {
                    settled += 1;
                    let refunded = treasury.balance(&payer).await;
                    info!(payer = %payer, kept = tendered - refunded, "buyer settled");
                }
                Err(e) => {
                    rejected += 1;
                    warn!(error = %e, burst, "purchase rejected");
                }
            }
        }

        // Sample the decay path through the idle gap.
        for sample in 1..=scenario.decay_samples {
            let offset =
                scenario.idle_gap_s * u64::from(sample) / (u64::from(scenario.decay_samples) + 1);
            let price = engine.current_price(at + offset).await;
            info!(burst, offset_s = offset, price, "decay sample");
        }
    }

    let end = t0 + u64::from(scenario.bursts) * scenario.idle_gap_s;
    let final_price = engine.current_price(end).await;

    Ok(ScenarioReport {
        settled,
        rejected,
        final_price,
    })
}
