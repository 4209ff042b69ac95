//! Watchlist Service
//!
//! Tracked teams, leagues, tickers, and crypto assets, with notes and an
//! alert flag per item.

use super::request::{ApiError, ApiRequest};
use super::Ack;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Team,
    League,
    Ticker,
    Crypto,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Team => "team",
            ItemType::League => "league",
            ItemType::Ticker => "ticker",
            ItemType::Crypto => "crypto",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "team" => Some(ItemType::Team),
            "league" => Some(ItemType::League),
            "ticker" => Some(ItemType::Ticker),
            "crypto" => Some(ItemType::Crypto),
            _ => None,
        }
    }

    pub const ALL: [ItemType; 4] = [
        ItemType::Team,
        ItemType::League,
        ItemType::Ticker,
        ItemType::Crypto,
    ];
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct WatchlistItem {
    pub id: u32,
    pub item_type: ItemType,
    /// Backend identifier of the tracked thing (team id, ticker symbol, ...)
    pub item_id: String,
    pub name: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub alert_enabled: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct NewWatchlistItem {
    pub item_type: ItemType,
    pub item_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub alert_enabled: bool,
}

#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct WatchlistUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_enabled: Option<bool>,
}

#[derive(serde::Deserialize)]
struct WatchlistResponse {
    items: Vec<WatchlistItem>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct BulkAddResponse {
    #[serde(default)]
    pub added: Vec<WatchlistItem>,
    #[serde(default)]
    pub skipped: u32,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct CheckResponse {
    pub in_watchlist: bool,
}

/// Fetch the current user's watchlist.
pub async fn list() -> Result<Vec<WatchlistItem>, ApiError> {
    let response: WatchlistResponse = ApiRequest::get("watchlist").send().await?;
    Ok(response.items)
}

pub(crate) fn add_request(item: &NewWatchlistItem) -> Result<ApiRequest, ApiError> {
    let body = serde_json::to_value(item).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(ApiRequest::post("watchlist").json(body))
}

pub async fn add(item: &NewWatchlistItem) -> Result<WatchlistItem, ApiError> {
    add_request(item)?.send().await
}

pub async fn update(id: u32, update: &WatchlistUpdate) -> Result<WatchlistItem, ApiError> {
    let body = serde_json::to_value(update).map_err(|e| ApiError::Decode(e.to_string()))?;
    ApiRequest::put(format!("watchlist/{}", id))
        .json(body)
        .send()
        .await
}

pub async fn remove(id: u32) -> Result<Ack, ApiError> {
    ApiRequest::delete(format!("watchlist/{}", id)).send().await
}

/// Add several items in one call.
pub async fn bulk_add(items: &[NewWatchlistItem]) -> Result<BulkAddResponse, ApiError> {
    ApiRequest::post("watchlist/bulk")
        .json(serde_json::json!({ "items": items }))
        .send()
        .await
}

/// Ask whether an item is already tracked.
pub async fn check(item_type: ItemType, item_id: &str) -> Result<bool, ApiError> {
    let response: CheckResponse =
        ApiRequest::get(format!("watchlist/check/{}/{}", item_type.as_str(), item_id))
            .send()
            .await?;
    Ok(response.in_watchlist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::Method;

    #[test]
    fn test_add_posts_item_body() {
        let item = NewWatchlistItem {
            item_type: ItemType::Ticker,
            item_id: "NVDA".into(),
            name: "NVIDIA".into(),
            notes: None,
            alert_enabled: true,
        };
        let req = add_request(&item).unwrap();
        assert_eq!(req.method(), Method::Post);
        assert_eq!(req.path(), "watchlist");
        assert_eq!(
            req.body(),
            Some(&serde_json::json!({
                "item_type": "ticker",
                "item_id": "NVDA",
                "name": "NVIDIA",
                "alert_enabled": true,
            }))
        );
    }

    #[test]
    fn test_item_type_round_trips_through_strings() {
        for item_type in ItemType::ALL {
            assert_eq!(ItemType::parse(item_type.as_str()), Some(item_type));
        }
        assert_eq!(ItemType::parse("bond"), None);
    }

    #[test]
    fn test_update_omits_unset_fields() {
        let update = WatchlistUpdate {
            alert_enabled: Some(false),
            ..Default::default()
        };
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body, serde_json::json!({"alert_enabled": false}));
    }
}
