use crate::domain::error::DomainError;
use crate::domain::ports::snowflake_source::SnowflakeSource;
use crate::domain::values::stock_query::StockQuery;
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://simplywall.st/api/snowflake";

/// Simply Wall St snowflake endpoint (no auth required).
///
/// The `reqwest::Client` inside is connection-pooled; share one source
/// behind an `Arc` to reuse connections across lookups.
pub struct SimplyWallStSource {
    client: Client,
    base_url: String,
}

impl SimplyWallStSource {
    pub fn new(base_url: Option<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for SimplyWallStSource {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl SnowflakeSource for SimplyWallStSource {
    fn name(&self) -> &str {
        "simplywallst"
    }

    async fn fetch(&self, query: &StockQuery) -> Result<serde_json::Value, DomainError> {
        let url = query.endpoint(&self.base_url);
        tracing::debug!(%url, "requesting snowflake");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(DomainError::Network(format!(
                "Simply Wall St returned {} for {query}",
                resp.status()
            )));
        }

        resp.json()
            .await
            .map_err(|e| DomainError::Parse(format!("{query}: {e}")))
    }
}
