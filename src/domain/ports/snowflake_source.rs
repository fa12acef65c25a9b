use crate::domain::error::DomainError;
use crate::domain::values::stock_query::StockQuery;
use async_trait::async_trait;

/// Where snowflake documents come from. The HTTP API in production; a file
/// or a fixed value offline and in tests.
#[async_trait]
pub trait SnowflakeSource: Send + Sync {
    /// Human-readable name of this source, used in logs.
    fn name(&self) -> &str;

    /// Fetch the raw document for one listing.
    async fn fetch(&self, query: &StockQuery) -> Result<serde_json::Value, DomainError>;
}
