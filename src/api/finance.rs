//! Finance Service
//!
//! Stock quotes, technical indicators, and price-direction predictions.

use serde_json::json;

use super::request::{ApiError, ApiRequest};
use super::Prediction;

/// A tracked stock with its latest quote.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct StockAsset {
    pub ticker: String,
    #[serde(default)]
    pub name: Option<String>,
    pub price: f64,
    /// Day change in percent, e.g. -1.42
    #[serde(default)]
    pub change_percent: Option<f64>,
    #[serde(default)]
    pub volume: Option<u64>,
}

/// Technical indicators for one symbol.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct StockIndicators {
    pub ticker: String,
    #[serde(default)]
    pub sma_20: Option<f64>,
    #[serde(default)]
    pub sma_50: Option<f64>,
    #[serde(default)]
    pub ema_12: Option<f64>,
    #[serde(default)]
    pub rsi: Option<f64>,
    #[serde(default)]
    pub macd: Option<f64>,
    #[serde(default)]
    pub macd_signal: Option<f64>,
    #[serde(default)]
    pub volatility: Option<f64>,
}

#[derive(serde::Deserialize)]
struct StockListResponse {
    stocks: Vec<StockAsset>,
}

#[derive(serde::Deserialize)]
struct HistoryResponse {
    predictions: Vec<Prediction>,
}

/// Fetch the tracked stock list with latest quotes.
pub async fn stocks() -> Result<Vec<StockAsset>, ApiError> {
    let response: StockListResponse = ApiRequest::get("finance/stocks").send().await?;
    Ok(response.stocks)
}

/// Fetch technical indicators for a symbol.
pub async fn indicators(symbol: &str) -> Result<StockIndicators, ApiError> {
    ApiRequest::get(format!("finance/indicators/{}", symbol))
        .send()
        .await
}

pub(crate) fn predict_request(ticker: &str) -> ApiRequest {
    ApiRequest::post("finance/predict").json(json!({ "ticker": ticker }))
}

/// Ask the model about an arbitrary ticker.
pub async fn predict(ticker: &str) -> Result<Prediction, ApiError> {
    predict_request(ticker).send().await
}

/// Ask the model about a tracked ticker.
pub async fn predict_ticker(ticker: &str) -> Result<Prediction, ApiError> {
    ApiRequest::post(format!("finance/predict/{}", ticker))
        .send()
        .await
}

/// Past finance predictions for the current user.
pub async fn history() -> Result<Vec<Prediction>, ApiError> {
    let response: HistoryResponse = ApiRequest::get("finance/predictions/history").send().await?;
    Ok(response.predictions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::Method;

    #[test]
    fn test_predict_posts_ticker_body() {
        let req = predict_request("NVDA");
        assert_eq!(req.method(), Method::Post);
        assert_eq!(req.path(), "finance/predict");
        assert_eq!(req.body(), Some(&serde_json::json!({"ticker": "NVDA"})));
    }

    #[test]
    fn test_indicators_decode_with_missing_fields() {
        let ind: StockIndicators = serde_json::from_value(serde_json::json!({
            "ticker": "AAPL",
            "rsi": 61.2,
            "volatility": 0.23
        }))
        .unwrap();
        assert_eq!(ind.rsi, Some(61.2));
        assert!(ind.sma_20.is_none());
        assert!(ind.macd.is_none());
    }
}
