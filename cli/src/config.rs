use std::path::Path;

use serde::Deserialize;

use pricing::params::CurveParams;

/// Process-level knobs, environment-driven.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Hard bound on units settled in a single purchase call.
    ///
    /// The surge loop is O(quantity), so an embedding must cap how much
    /// one settlement may ask for; this keeps a single call from stalling
    /// the price stream.
    pub max_quantity_per_purchase: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let max_quantity_per_purchase = std::env::var("MAX_QUANTITY_PER_PURCHASE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(500);

        Self {
            max_quantity_per_purchase,
        }
    }
}

/// Demand scenario replayed against the engine.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioConfig {
    /// Number of demand bursts to replay.
    pub bursts: u32,

    /// Concurrent buyers in each burst.
    pub buyers_per_burst: u32,

    /// Units each buyer asks for.
    pub quantity_per_buyer: u64,

    /// Idle seconds between bursts, the window in which decay shows.
    pub idle_gap_s: u64,

    /// Price samples logged while the curve decays between bursts.
    pub decay_samples: u32,
}

/// Full sale configuration: curve parameters plus the demand scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct SaleConfig {
    pub curve: CurveParams,
    pub scenario: ScenarioConfig,
}

impl SaleConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let cfg: SaleConfig = serde_json::from_str(&raw)?;
        cfg.curve.validate()?;
        Ok(cfg)
    }
}

impl Default for SaleConfig {
    fn default() -> Self {
        Self {
            curve: CurveParams {
                starting_price: 1_000_000_000,
                bottom_price: 250_000_000,
                decay_time_s: 86_400,
                growth_num: 101,
                growth_den: 100,
            },
            scenario: ScenarioConfig {
                bursts: 4,
                buyers_per_burst: 3,
                quantity_per_buyer: 5,
                idle_gap_s: 6 * 3_600,
                decay_samples: 3,
            },
        }
    }
}
