//! The stock price record and its request body.

use serde::{de, Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// One daily observation for a trade code, as stored in `stocks`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct StockRecord {
    pub id: i64,
    pub date: String,
    pub trade_code: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Body of create and update requests. Every field is required; numeric
/// fields also accept numeric strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StockPayload {
    pub date: String,
    pub trade_code: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub open: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub high: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub low: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub close: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub volume: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("'{}' is not a number", s))),
    }
}
