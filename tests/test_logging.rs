//! Construction failures are logged before they are returned.

mod common;

use common::acme_document;
use snowflake::infrastructure::sources::fixed::FixedSource;
use snowflake::StockClient;
use std::io::Write;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

fn capture() -> (Captured, tracing::subscriber::DefaultGuard) {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    (captured, tracing::subscriber::set_default(subscriber))
}

#[tokio::test]
async fn test_invalid_listing_is_logged() {
    let (captured, _guard) = capture();
    let source = Arc::new(FixedSource::new(acme_document()));

    let result = StockClient::with_source(source.clone(), "NYSE", "").await;
    assert!(result.is_err());
    assert_eq!(source.calls(), 0);

    let logs = captured.contents();
    assert!(logs.contains("WARN"), "no warning in: {logs}");
    assert!(logs.contains("invalid listing"), "no warning in: {logs}");
    assert!(logs.contains("ticker must not be empty"), "no error in: {logs}");
}

#[tokio::test]
async fn test_fetch_failure_is_logged() {
    let (captured, _guard) = capture();
    let source = Arc::new(FixedSource::failing("connection reset"));

    let result = StockClient::with_source(source, "NYSE", "ACM").await;
    assert!(result.is_err());

    let logs = captured.contents();
    assert!(logs.contains("snowflake fetch failed"), "no warning in: {logs}");
    assert!(logs.contains("NYSE:ACM"), "no query in: {logs}");
}
