use crate::domain::error::DomainError;
use crate::domain::ports::snowflake_source::SnowflakeSource;
use crate::domain::values::stock_query::StockQuery;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Answers every fetch with the same document, or the same failure.
/// Counts calls so callers can check how often a lookup went out.
pub struct FixedSource {
    response: Result<serde_json::Value, String>,
    calls: AtomicUsize,
}

impl FixedSource {
    pub fn new(document: serde_json::Value) -> Self {
        Self {
            response: Ok(document),
            calls: AtomicUsize::new(0),
        }
    }

    /// A source whose every fetch fails with a network error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SnowflakeSource for FixedSource {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn fetch(&self, _query: &StockQuery) -> Result<serde_json::Value, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone().map_err(DomainError::Network)
    }
}
