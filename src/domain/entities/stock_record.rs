use crate::domain::error::FieldError;
use crate::domain::values::score_dimension::ScoreDimension;
use crate::domain::values::snowflake_scores::{SnowflakeScores, SCORES_FIELD};
use once_cell::sync::OnceCell;
use serde_json::Value;

pub const COMPANY_NAME: &str = "companyName";
pub const UNIQUE_SYMBOL: &str = "uniqueSymbol";
pub const EXCHANGE_SYMBOL: &str = "primaryExchangeSymbol";
pub const TICKER_SYMBOL: &str = "primaryTickerSymbol";
pub const SNOWFLAKE_COLOUR: &str = "snowflakeColour";

/// A snowflake API response. The document is kept as-is and fields are
/// read from it on demand; the score array is parsed at most once.
#[derive(Debug)]
pub struct StockRecord {
    document: Value,
    scores: OnceCell<SnowflakeScores>,
}

impl StockRecord {
    pub fn new(document: Value) -> Self {
        Self {
            document,
            scores: OnceCell::new(),
        }
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn company_name(&self) -> Result<&str, FieldError> {
        self.string_field(COMPANY_NAME)
    }

    pub fn unique_symbol(&self) -> Result<&str, FieldError> {
        self.string_field(UNIQUE_SYMBOL)
    }

    pub fn exchange_symbol(&self) -> Result<&str, FieldError> {
        self.string_field(EXCHANGE_SYMBOL)
    }

    pub fn ticker_symbol(&self) -> Result<&str, FieldError> {
        self.string_field(TICKER_SYMBOL)
    }

    pub fn snowflake_color(&self) -> Result<f64, FieldError> {
        self.field(SNOWFLAKE_COLOUR)?
            .as_f64()
            .ok_or(FieldError::TypeMismatch {
                field: SNOWFLAKE_COLOUR,
                expected: "a number",
            })
    }

    /// Scores in API order. The first successful parse is cached and every
    /// later call, including the per-dimension getters, reads the cache.
    pub fn snowflake_scores(&self) -> Result<&SnowflakeScores, FieldError> {
        self.scores
            .get_or_try_init(|| SnowflakeScores::parse(self.field(SCORES_FIELD)?))
    }

    pub fn score(&self, dimension: ScoreDimension) -> Result<i64, FieldError> {
        self.snowflake_scores()?.get(dimension)
    }

    pub fn value(&self) -> Result<i64, FieldError> {
        self.score(ScoreDimension::Value)
    }

    pub fn future(&self) -> Result<i64, FieldError> {
        self.score(ScoreDimension::Future)
    }

    pub fn past(&self) -> Result<i64, FieldError> {
        self.score(ScoreDimension::Past)
    }

    pub fn health(&self) -> Result<i64, FieldError> {
        self.score(ScoreDimension::Health)
    }

    pub fn income(&self) -> Result<i64, FieldError> {
        self.score(ScoreDimension::Income)
    }

    fn field(&self, field: &'static str) -> Result<&Value, FieldError> {
        // `get` on a non-object yields None, so a null document reads as empty
        match self.document.get(field) {
            Some(Value::Null) | None => Err(FieldError::Missing { field }),
            Some(v) => Ok(v),
        }
    }

    fn string_field(&self, field: &'static str) -> Result<&str, FieldError> {
        self.field(field)?.as_str().ok_or(FieldError::TypeMismatch {
            field,
            expected: "a string",
        })
    }
}
