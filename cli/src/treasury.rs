//! In-memory treasury standing in for the host's payment rail.
//!
//! The engine never holds funds: buyers withdraw to tender a purchase and
//! refunds credit straight back to their balance here.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use pricing::transfer::ValueTransfer;

#[derive(Default, Clone)]
pub struct InMemoryTreasury {
    balances: Arc<Mutex<HashMap<String, u128>>>,
}

impl InMemoryTreasury {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn deposit(&self, buyer: &str, amount: u128) {
        let mut balances = self.balances.lock().await;
        *balances.entry(buyer.to_string()).or_insert(0) += amount;
    }

    /// Withdraw `amount` from `buyer` to tender a purchase.
    pub async fn withdraw(&self, buyer: &str, amount: u128) -> anyhow::Result<()> {
        let mut balances = self.balances.lock().await;
        let balance = balances.entry(buyer.to_string()).or_insert(0);

        if *balance < amount {
            anyhow::bail!("insufficient balance for {buyer}: {balance} < {amount}");
        }
        *balance -= amount;
        Ok(())
    }

    pub async fn balance(&self, buyer: &str) -> u128 {
        self.balances.lock().await.get(buyer).copied().unwrap_or(0)
    }
}

#[async_trait]
impl ValueTransfer for InMemoryTreasury {
    async fn transfer(&self, recipient: &str, amount: u128) -> anyhow::Result<()> {
        self.deposit(recipient, amount).await;
        Ok(())
    }
}
