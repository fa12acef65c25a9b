use crate::domain::error::DomainError;
use std::fmt;
use std::str::FromStr;

/// Exchange and ticker identifying one listing, e.g. `NYSE:ACM`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StockQuery {
    exchange: String,
    ticker: String,
}

impl StockQuery {
    pub fn new(
        exchange: impl Into<String>,
        ticker: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let exchange = exchange.into();
        let ticker = ticker.into();
        if exchange.is_empty() {
            return Err("exchange must not be empty".into());
        }
        if ticker.is_empty() {
            return Err("ticker must not be empty".into());
        }
        Ok(Self { exchange, ticker })
    }

    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Endpoint for this query under `base`. Both parts are inserted verbatim.
    pub fn endpoint(&self, base: &str) -> String {
        format!(
            "{}/{}:{}",
            base.trim_end_matches('/'),
            self.exchange,
            self.ticker
        )
    }
}

impl fmt::Display for StockQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.exchange, self.ticker)
    }
}

impl FromStr for StockQuery {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (exchange, ticker) = s.split_once(':').ok_or_else(|| {
            DomainError::InvalidInput(format!("Expected EXCHANGE:TICKER, got {s}"))
        })?;
        StockQuery::new(exchange, ticker)
    }
}
