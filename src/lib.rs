pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::lookup::LookupUseCase;
use crate::domain::entities::stock_record::StockRecord;
use crate::domain::error::{DomainError, FieldError};
use crate::domain::ports::snowflake_source::SnowflakeSource;
use crate::domain::values::score_dimension::ScoreDimension;
use crate::domain::values::snowflake_scores::SnowflakeScores;
use crate::domain::values::stock_query::StockQuery;
use crate::infrastructure::sources::simplywallst::SimplyWallStSource;
use std::sync::Arc;

/// Environment variable overriding the snowflake API base URL.
pub const API_BASE_ENV: &str = "SNOWFLAKE_API_BASE";

/// Base URL from `SNOWFLAKE_API_BASE`. Unset and empty both mean the default.
pub fn api_base_from_env() -> Option<String> {
    non_empty(std::env::var(API_BASE_ENV).ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// One listing's snowflake, fetched once at construction.
pub struct StockClient {
    query: StockQuery,
    record: StockRecord,
}

impl StockClient {
    /// Fetch from Simply Wall St (or `SNOWFLAKE_API_BASE` when set).
    pub async fn new(exchange: &str, ticker: &str) -> Result<Self, DomainError> {
        let source: Arc<dyn SnowflakeSource> =
            Arc::new(SimplyWallStSource::new(api_base_from_env()));
        Self::with_source(source, exchange, ticker).await
    }

    pub async fn with_source(
        source: Arc<dyn SnowflakeSource>,
        exchange: &str,
        ticker: &str,
    ) -> Result<Self, DomainError> {
        let query = StockQuery::new(exchange, ticker).map_err(|e| {
            tracing::warn!(%exchange, %ticker, error = %e, "invalid listing");
            e
        })?;
        let record = LookupUseCase::new(source).execute(&query).await?;
        Ok(Self { query, record })
    }

    pub fn from_record(query: StockQuery, record: StockRecord) -> Self {
        Self { query, record }
    }

    pub fn query(&self) -> &StockQuery {
        &self.query
    }

    pub fn record(&self) -> &StockRecord {
        &self.record
    }

    // Delegating accessors
    pub fn company_name(&self) -> Result<&str, FieldError> {
        self.record.company_name()
    }

    pub fn unique_symbol(&self) -> Result<&str, FieldError> {
        self.record.unique_symbol()
    }

    pub fn exchange_symbol(&self) -> Result<&str, FieldError> {
        self.record.exchange_symbol()
    }

    pub fn ticker_symbol(&self) -> Result<&str, FieldError> {
        self.record.ticker_symbol()
    }

    pub fn snowflake_scores(&self) -> Result<&SnowflakeScores, FieldError> {
        self.record.snowflake_scores()
    }

    pub fn score(&self, dimension: ScoreDimension) -> Result<i64, FieldError> {
        self.record.score(dimension)
    }

    pub fn value(&self) -> Result<i64, FieldError> {
        self.record.value()
    }

    pub fn future(&self) -> Result<i64, FieldError> {
        self.record.future()
    }

    pub fn past(&self) -> Result<i64, FieldError> {
        self.record.past()
    }

    pub fn health(&self) -> Result<i64, FieldError> {
        self.record.health()
    }

    pub fn income(&self) -> Result<i64, FieldError> {
        self.record.income()
    }

    pub fn snowflake_color(&self) -> Result<f64, FieldError> {
        self.record.snowflake_color()
    }
}
