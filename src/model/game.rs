use serde::{Deserialize, Serialize};

use crate::model::status::GameStatus;

/// One game from the sportsdata.io GamesByDate response. Every field is
/// optional so a partial record still deserializes; unknown extra fields
/// are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameRecord {
    #[serde(default)]
    pub status: GameStatus,
    pub away_team: Option<String>,
    pub home_team: Option<String>,
    pub away_team_score: Option<i64>,
    pub home_team_score: Option<i64>,
    pub date_time: Option<String>,
    pub channel: Option<String>,
}
