use crate::domain::error::DomainError;
use crate::domain::ports::snowflake_source::SnowflakeSource;
use crate::domain::values::stock_query::StockQuery;
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads a saved snowflake response from disk. The query is ignored; the
/// file is expected to hold the document for whatever listing was asked for.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SnowflakeSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch(&self, _query: &StockQuery) -> Result<serde_json::Value, DomainError> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| DomainError::Io(format!("{}: {e}", self.path.display())))?;
        serde_json::from_str(&body)
            .map_err(|e| DomainError::Parse(format!("{}: {e}", self.path.display())))
    }
}
