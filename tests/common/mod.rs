//! Shared test helpers.
#![allow(dead_code)]

use serde_json::{json, Value};
use snowflake::infrastructure::sources::fixed::FixedSource;
use snowflake::infrastructure::sources::simplywallst::SimplyWallStSource;
use snowflake::StockClient;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub fn acme_document() -> Value {
    json!({
        "companyName": "Acme",
        "uniqueSymbol": "ACM",
        "primaryExchangeSymbol": "NYSE",
        "primaryTickerSymbol": "ACM",
        "snowflakeColour": 2.5,
        "snowflakeScores": [3, 4, 1, 5, 2]
    })
}

pub async fn client_for(document: Value) -> StockClient {
    StockClient::with_source(Arc::new(FixedSource::new(document)), "NYSE", "ACM")
        .await
        .unwrap()
}

/// HTTP source pointed at a local server, ignoring any proxy settings.
pub fn local_source(base: String) -> SimplyWallStSource {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    SimplyWallStSource::with_client(client, Some(base))
}

/// Serve one canned HTTP response on a local port. Returns the base URL and
/// a handle resolving to the request head (request line and headers).
pub async fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status}\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&buf).into_owned()
    });

    (format!("http://{addr}"), handle)
}
