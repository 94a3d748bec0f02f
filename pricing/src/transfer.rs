use async_trait::async_trait;

/// Abstraction over the host's value-transfer rail.
///
/// The engine never holds funds itself; the embedding system tenders a
/// payment amount alongside `purchase` and supplies this capability so the
/// engine can send any excess back to the payer.
///
/// This trait intentionally hides:
/// - custody and account bookkeeping
/// - transport / signing details
///
/// An error from `transfer` aborts the whole settlement: the engine treats
/// a refund that cannot be completed as a failure of the purchase itself.
#[async_trait]
pub trait ValueTransfer: Send + Sync + 'static {
    async fn transfer(&self, recipient: &str, amount: u128) -> anyhow::Result<()>;
}
