//! Exchange-rate lookup seam for the application.

use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    async fn get_rate(&self, from: &str, to: &str) -> Result<f64>;
}
