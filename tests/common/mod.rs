//! In-process mock of the InvestHub backend.

#![allow(dead_code)]

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use investhub_mini::Endpoint;

/// Canned reply for one path
#[derive(Clone)]
pub enum Reply {
    Json(Value),
    Status(u16),
    Raw(&'static str),
}

#[derive(Default)]
pub struct MockBackend {
    replies: Mutex<HashMap<String, Reply>>,
    /// (path and query, Telegram-Init-Data header) per request
    seen: Mutex<Vec<(String, Option<String>)>>,
}

impl MockBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Backend answering every endpoint with its sample payload
    pub fn with_samples() -> Arc<Self> {
        let backend = Self::new();
        for endpoint in Endpoint::ALL {
            backend.reply(endpoint, Reply::Json(sample(endpoint)));
        }
        backend
    }

    pub fn reply(&self, endpoint: Endpoint, reply: Reply) {
        self.replies
            .lock()
            .unwrap()
            .insert(endpoint.path().to_string(), reply);
    }

    pub fn requests(&self) -> Vec<(String, Option<String>)> {
        self.seen.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    /// Serve on an ephemeral loopback port; returns the base URL
    pub async fn spawn(self: &Arc<Self>) -> String {
        let router = Router::new()
            .fallback(handle)
            .with_state(Arc::clone(self));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        format!("http://{}", addr)
    }
}

async fn handle(State(backend): State<Arc<MockBackend>>, uri: Uri, headers: HeaderMap) -> Response {
    let key = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    let init_data = headers
        .get("Telegram-Init-Data")
        .map(|v| v.to_str().unwrap_or_default().to_string());

    backend.seen.lock().unwrap().push((key.clone(), init_data));

    let reply = backend.replies.lock().unwrap().get(&key).cloned();
    match reply {
        Some(Reply::Json(body)) => axum::Json(body).into_response(),
        Some(Reply::Status(code)) => StatusCode::from_u16(code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        Some(Reply::Raw(body)) => (StatusCode::OK, body).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Representative payload per endpoint, shaped like the live backend
pub fn sample(endpoint: Endpoint) -> Value {
    match endpoint {
        Endpoint::Dashboard => json!({
            "user": {"user_id": "42", "username": "satoshi"},
            "prices": {"bitcoin": 64000, "ethereum": 3100.5, "solana": 145.2},
            "highlights": [
                {"label": "BTC Dominance", "value": "N/A"},
                {"label": "Fear & Greed", "value": "N/A"}
            ]
        }),
        Endpoint::StocksTop => json!({"items": [
            {"symbol": "NVDA", "price": 880.08, "change_pct": 3.2},
            {"symbol": "AAPL", "price": 189.5, "change_pct": 1.1}
        ]}),
        Endpoint::EtfsTop => json!({"items": [
            {"symbol": "SPY", "price": 512.3},
            {"symbol": "QQQ", "price": 438}
        ]}),
        Endpoint::ForexTop => json!({"items": [
            {"pair": "EUR/USD", "rate": 1.0842, "change_pct": 0.2}
        ]}),
        Endpoint::CryptoTop => json!({"items": [
            {"rank": 1, "symbol": "BTC", "price": 64000},
            {"rank": 2, "symbol": "ETH", "price": 3100.5}
        ]}),
        Endpoint::TonPrice => json!({"price": {"usd": 5.41, "usd_24h_change": -1.7}}),
        Endpoint::TonProjects => json!({"items": [
            {"address": "EQA1", "metadata": {"name": "Notcoin", "symbol": "NOT"}}
        ]}),
        Endpoint::TonCollections => json!({"collections": ["TON Diamonds"]}),
        Endpoint::NftCollections => json!({"collections": ["azuki", "pudgy-penguins"]}),
        Endpoint::NftFloors => json!({"floors": {"azuki": 4.2}}),
        Endpoint::Portfolio => json!({"allocation": {"crypto": 3, "stock": 1}}),
        Endpoint::PortfolioItems => json!({"items": [
            {"symbol": "BTC", "asset_type": "crypto", "amount": 0.25}
        ]}),
        Endpoint::Lessons => json!({"lessons": ["What is a stock?"]}),
        Endpoint::Glossary => json!({"glossary": ["APY"]}),
        Endpoint::NewsHeadlines => json!({"items": [
            {"title": "Fed holds rates", "url": "https://news.example/fed", "source": "Reuters"}
        ]}),
        Endpoint::Profile => json!({
            "user_id": "42", "username": "satoshi", "tier": "pro", "language": "en", "badge": "early"
        }),
    }
}
