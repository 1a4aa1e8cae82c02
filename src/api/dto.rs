//! Data Transfer Objects
//!
//! Response records for the backend endpoints. Every field is optional and
//! defaults when absent, so `{}` decodes to `Default::default()`, which is
//! also the fallback used when a fetch fails. Field decoding is lenient: a
//! wrongly-typed field, list element or nested record becomes absent
//! instead of failing the whole payload.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// ============================================
// Lenient field decoding
// ============================================

/// Arrays decoded element by element; a malformed element becomes its
/// default, and a non-array is an empty list
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    })
}

/// Nested record; anything that does not decode is the default
fn lenient_record<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(serde_json::from_value(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Numbers and numeric strings; anything else is absent
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(as_number(&Value::deserialize(deserializer)?))
}

/// Strings, or scalars rendered as text; anything else is absent
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// JSON objects only
fn lenient_map<'de, D>(deserializer: D) -> Result<Option<Map<String, Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => Some(map),
        _ => None,
    })
}

/// Coerce a JSON value to a number the way the dashboard displays it
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Render a display-only JSON value as text
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

// ============================================
// Dashboard
// ============================================

/// `GET /api/dashboard`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DashboardResponse {
    #[serde(default, deserialize_with = "lenient_list")]
    pub highlights: Vec<Highlight>,
    #[serde(default, deserialize_with = "lenient_map")]
    pub prices: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Highlight {
    #[serde(default, deserialize_with = "lenient_string")]
    pub label: Option<String>,
    #[serde(default)]
    pub value: Value,
}

// ============================================
// Markets
// ============================================

/// `GET /api/markets/{stocks,etfs}/top`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct QuoteList {
    #[serde(default, deserialize_with = "lenient_list")]
    pub items: Vec<Quote>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Quote {
    #[serde(default, deserialize_with = "lenient_string")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub change_pct: Option<f64>,
}

/// `GET /api/markets/forex/top`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ForexList {
    #[serde(default, deserialize_with = "lenient_list")]
    pub items: Vec<ForexPair>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ForexPair {
    #[serde(default, deserialize_with = "lenient_string")]
    pub pair: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rate: Option<f64>,
}

// ============================================
// Crypto
// ============================================

/// `GET /api/crypto/top`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CryptoList {
    #[serde(default, deserialize_with = "lenient_list")]
    pub items: Vec<CryptoAsset>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CryptoAsset {
    #[serde(default, deserialize_with = "lenient_string")]
    pub rank: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: Option<f64>,
}

// ============================================
// TON
// ============================================

/// `GET /api/ton/price`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TonPriceResponse {
    #[serde(default, deserialize_with = "lenient_map")]
    pub price: Option<Map<String, Value>>,
}

/// `GET /api/ton/projects`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TonProjects {
    #[serde(default, deserialize_with = "lenient_list")]
    pub items: Vec<Jetton>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Jetton {
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient_record")]
    pub metadata: JettonMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct JettonMetadata {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub symbol: Option<String>,
}

/// `GET /api/ton/nft/collections` and `GET /api/nft/collections`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CollectionList {
    #[serde(default, deserialize_with = "lenient_list")]
    pub collections: Vec<Value>,
}

// ============================================
// NFT
// ============================================

/// `GET /api/nft/floors`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NftFloors {
    #[serde(default, deserialize_with = "lenient_map")]
    pub floors: Option<Map<String, Value>>,
}

// ============================================
// Portfolio
// ============================================

/// `GET /api/portfolio`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PortfolioOverview {
    #[serde(default, deserialize_with = "lenient_map")]
    pub allocation: Option<Map<String, Value>>,
}

/// `GET /api/portfolio/items`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PortfolioItems {
    #[serde(default, deserialize_with = "lenient_list")]
    pub items: Vec<Holding>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Holding {
    #[serde(default, deserialize_with = "lenient_string")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub asset_type: Option<String>,
    #[serde(default)]
    pub amount: Value,
}

// ============================================
// Education
// ============================================

/// `GET /api/education/lessons`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Lessons {
    #[serde(default, deserialize_with = "lenient_list")]
    pub lessons: Vec<Value>,
}

/// `GET /api/education/glossary`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Glossary {
    #[serde(default, deserialize_with = "lenient_list")]
    pub glossary: Vec<Value>,
}

// ============================================
// News
// ============================================

/// `GET /api/news/headlines`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Headlines {
    #[serde(default, deserialize_with = "lenient_list")]
    pub items: Vec<Headline>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Headline {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub source: Option<String>,
}

// ============================================
// User
// ============================================

/// `GET /api/user/profile`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub tier: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub badge: Option<String>,
}
