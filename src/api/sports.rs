//! Sports Service
//!
//! Upcoming matches, team statistics, and match predictions.

use serde_json::json;

use super::request::{ApiError, ApiRequest};
use super::Prediction;

/// An upcoming fixture with bookmaker odds and recent form.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Match {
    pub id: u32,
    pub home_team: String,
    pub away_team: String,
    pub league: String,
    pub date: String,
    #[serde(default)]
    pub home_odds: Option<f64>,
    #[serde(default)]
    pub draw_odds: Option<f64>,
    #[serde(default)]
    pub away_odds: Option<f64>,
    /// Recent form strings like "WWDLW"
    #[serde(default)]
    pub home_form: Option<String>,
    #[serde(default)]
    pub away_form: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct TeamStatistics {
    pub team: String,
    pub matches_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
    #[serde(default)]
    pub recent_form: Option<String>,
}

impl TeamStatistics {
    pub fn win_rate(&self) -> f64 {
        if self.matches_played == 0 {
            return 0.0;
        }
        self.wins as f64 / self.matches_played as f64
    }
}

#[derive(serde::Deserialize)]
struct MatchListResponse {
    matches: Vec<Match>,
}

#[derive(serde::Deserialize)]
struct HistoryResponse {
    predictions: Vec<Prediction>,
}

/// Fetch upcoming matches.
pub async fn matches() -> Result<Vec<Match>, ApiError> {
    let response: MatchListResponse = ApiRequest::get("sports/matches").send().await?;
    Ok(response.matches)
}

/// Fetch statistics for a single team.
pub async fn team_statistics(team: &str) -> Result<TeamStatistics, ApiError> {
    ApiRequest::get(format!("sports/statistics/{}", team))
        .send()
        .await
}

pub(crate) fn predict_request(home_team: &str, away_team: &str, league: &str) -> ApiRequest {
    ApiRequest::post("sports/predict").json(json!({
        "home_team": home_team,
        "away_team": away_team,
        "league": league,
    }))
}

/// Ask the model about an ad-hoc fixture.
pub async fn predict(
    home_team: &str,
    away_team: &str,
    league: &str,
) -> Result<Prediction, ApiError> {
    predict_request(home_team, away_team, league).send().await
}

/// Ask the model about a known upcoming match.
pub async fn predict_match(match_id: u32) -> Result<Prediction, ApiError> {
    ApiRequest::post(format!("sports/predict/{}", match_id))
        .send()
        .await
}

/// Past sports predictions for the current user.
pub async fn history() -> Result<Vec<Prediction>, ApiError> {
    let response: HistoryResponse = ApiRequest::get("sports/history").send().await?;
    Ok(response.predictions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::Method;

    #[test]
    fn test_predict_posts_fixture_body() {
        let req = predict_request("Arsenal", "Chelsea", "Premier League");
        assert_eq!(req.method(), Method::Post);
        assert_eq!(req.path(), "sports/predict");
        assert_eq!(
            req.body(),
            Some(&serde_json::json!({
                "home_team": "Arsenal",
                "away_team": "Chelsea",
                "league": "Premier League",
            }))
        );
    }

    #[test]
    fn test_win_rate_handles_empty_record() {
        let stats = TeamStatistics {
            team: "Arsenal".into(),
            matches_played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_scored: 0,
            goals_conceded: 0,
            recent_form: None,
        };
        assert_eq!(stats.win_rate(), 0.0);
    }

    #[test]
    fn test_match_decodes_without_odds() {
        let m: Match = serde_json::from_value(serde_json::json!({
            "id": 3,
            "home_team": "Lakers",
            "away_team": "Celtics",
            "league": "NBA",
            "date": "2026-09-01T19:00:00Z"
        }))
        .unwrap();
        assert!(m.home_odds.is_none());
        assert!(m.home_form.is_none());
    }
}
