use std::path::PathBuf;

use clap::Parser;

use crate::config::SaleConfig;

#[derive(Debug, Parser)]
#[clap(name = "qdes", version)]
pub struct Cli {
    /// Path to a JSON sale config (curve parameters + demand scenario).
    /// Built-in defaults are used when omitted.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Emit JSON logs instead of pretty output
    #[clap(long)]
    pub json_logs: bool,
}

/// Resolve the sale configuration from CLI input
pub(crate) fn load_sale_config(cli: &Cli) -> anyhow::Result<SaleConfig> {
    match &cli.config {
        Some(path) => SaleConfig::load(path),
        None => Ok(SaleConfig::default()),
    }
}
