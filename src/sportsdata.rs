use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::{error, info, info_span, instrument};

use crate::model::game::GameRecord;

/// Games that tip off late in US time zones still belong to the previous
/// game day, so the boundary sits 6 hours behind midnight UTC.
const GAME_DAY_OFFSET_HOURS: i64 = 6;

/// Calendar date of the current game day for a given UTC instant.
pub fn game_day(now_utc: DateTime<Utc>) -> NaiveDate {
    (now_utc - Duration::hours(GAME_DAY_OFFSET_HOURS)).date_naive()
}

/// Client for the sportsdata.io NBA scores API.
#[derive(Debug)]
pub struct SportsData {
    api_key: String,
}

impl SportsData {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }

    /// Full GamesByDate request URL for one game day.
    pub fn games_url(&self, date: NaiveDate) -> String {
        format!(
            "https://api.sportsdata.io/v3/nba/scores/json/GamesByDate/{}?key={}",
            date.format("%Y-%m-%d"),
            self.api_key
        )
    }

    /// Fetch the schedule/scores for one game day. A single attempt: any
    /// transport error, non-2xx status, or malformed body is logged and
    /// reported as Err, and the caller halts without publishing.
    #[instrument(level = "info", skip(self))]
    pub fn games_by_date(&self, date: NaiveDate) -> Result<Vec<GameRecord>, String> {
        let url = self.games_url(date);
        let response_result = {
            let _span = info_span!("sportsdata_fetch", date = %date).entered();
            ureq::get(&url).call()
        };
        match response_result {
            Ok(response) => {
                let mut body_reader = response.into_body();
                match body_reader.read_to_string() {
                    Ok(body) => match Self::parse_games(&body) {
                        Ok(games) => {
                            info!(date = %date, game_count = games.len(), "Fetched games for date");
                            Ok(games)
                        }
                        Err(e) => {
                            error!(error = %e, "Failed to deserialize GamesByDate response");
                            Err(e)
                        }
                    },
                    Err(e) => {
                        error!(error = %e, "Failed to read GamesByDate response body");
                        Err(format!("Failed to read response body: {}", e))
                    }
                }
            }
            Err(e) => {
                error!(error = %e, date = %date, "GamesByDate request failed");
                Err(format!("Request failed: {}", e))
            }
        }
    }

    /// Decode a raw GamesByDate response body (no network).
    pub fn parse_games(body: &str) -> Result<Vec<GameRecord>, String> {
        serde_json::from_str::<Vec<GameRecord>>(body)
            .map_err(|e| format!("Failed to deserialize games: {}", e))
    }
}
