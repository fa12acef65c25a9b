use crate::domain::entities::stock_record::StockRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::snowflake_source::SnowflakeSource;
use crate::domain::values::stock_query::StockQuery;
use std::sync::Arc;

pub struct LookupUseCase {
    source: Arc<dyn SnowflakeSource>,
}

impl LookupUseCase {
    pub fn new(source: Arc<dyn SnowflakeSource>) -> Self {
        Self { source }
    }

    /// Fetch once and wrap the body. Anything other than a JSON object is
    /// treated as a malformed response.
    pub async fn execute(&self, query: &StockQuery) -> Result<StockRecord, DomainError> {
        let result = self.source.fetch(query).await.and_then(|document| {
            if document.is_object() {
                Ok(StockRecord::new(document))
            } else {
                Err(DomainError::Parse(format!(
                    "expected a JSON object for {query}, got {}",
                    kind_of(&document)
                )))
            }
        });

        match &result {
            Ok(_) => {
                tracing::debug!(source = self.source.name(), %query, "snowflake fetched")
            }
            Err(e) => tracing::warn!(
                source = self.source.name(),
                %query,
                error = %e,
                "snowflake fetch failed"
            ),
        }
        result
    }
}

fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::sources::fixed::FixedSource;
    use serde_json::json;

    #[tokio::test]
    async fn test_object_body_accepted() {
        let source = Arc::new(FixedSource::new(json!({"companyName": "Acme"})));
        let uc = LookupUseCase::new(source.clone());
        let query = StockQuery::new("NYSE", "ACM").unwrap();
        let record = uc.execute(&query).await.unwrap();
        assert_eq!(record.company_name().unwrap(), "Acme");
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_array_body_rejected() {
        let uc = LookupUseCase::new(Arc::new(FixedSource::new(json!([1, 2, 3]))));
        let query = StockQuery::new("NYSE", "ACM").unwrap();
        let err = uc.execute(&query).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parse error: expected a JSON object for NYSE:ACM, got an array"
        );
    }

    #[tokio::test]
    async fn test_source_error_passed_through() {
        let uc = LookupUseCase::new(Arc::new(FixedSource::failing("connection refused")));
        let query = StockQuery::new("NYSE", "ACM").unwrap();
        let err = uc.execute(&query).await.unwrap_err();
        assert!(matches!(err, DomainError::Network(ref m) if m == "connection refused"));
    }
}
