pub mod cli;
mod config;
mod scenario;
mod time;
mod treasury;

use std::sync::Arc;

use clap::Parser;
use tracing::Instrument;

use common::logger::{TraceId, init_tracing, root_span};
use pricing::engine::PricingEngine;

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::treasury::InMemoryTreasury;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing("qdes", cli.json_logs);

    let app = AppConfig::from_env();
    let sale = cli::load_sale_config(&cli)?;

    let treasury = InMemoryTreasury::new();
    let engine = Arc::new(PricingEngine::new(sale.curve, Arc::new(treasury.clone())));

    let trace_id = TraceId::default();
    let span = root_span("demand-replay", &trace_id);

    let report = scenario::run(
        engine,
        treasury,
        &sale,
        app.max_quantity_per_purchase,
        time::now_s(),
    )
    .instrument(span)
    .await?;

    tracing::info!(
        settled = report.settled,
        rejected = report.rejected,
        final_price = report.final_price,
        "scenario complete"
    );

    Ok(())
}
