use serde::{Deserialize, Serialize};

/// Upstream game status discriminator. The API reports a handful of other
/// values (Postponed, Canceled, ...) which all collapse into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameStatus {
    Final,
    InProgress,
    Scheduled,
    #[serde(other)]
    #[default]
    Other,
}

impl GameStatus {
    /// Text used on the "Game Status:" line of a formatted block.
    pub fn label(&self) -> &'static str {
        match self {
            GameStatus::Final => "Final",
            GameStatus::InProgress => "InProgress",
            GameStatus::Scheduled => "Scheduled",
            GameStatus::Other => "Unknown",
        }
    }
}
