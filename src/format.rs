use crate::model::game::GameRecord;
use crate::model::status::GameStatus;

/// Subject line attached to every published digest.
pub const SUBJECT: &str = "NBA Game Updates";

/// Body sent when the day has no games at all.
pub const NO_GAMES_MESSAGE: &str = "No games scheduled for today.";

/// Line separating consecutive game blocks in the digest body.
pub const GAME_SEPARATOR: &str = "-----------------------------\n";

fn name(n: &Option<String>) -> &str {
    n.as_deref().unwrap_or("Unknown")
}

fn score(s: Option<i64>) -> String {
    s.map(|v| v.to_string()).unwrap_or_else(|| "N/A".to_string())
}

/// Format one game into a text block. Total over any record shape: missing
/// fields render as placeholders rather than failing.
pub fn game_summary(game: &GameRecord) -> String {
    let away = name(&game.away_team);
    let home = name(&game.home_team);
    let start = game.date_time.as_deref().unwrap_or("Unknown");
    let channel = game.channel.as_deref().unwrap_or("Unknown");

    match game.status {
        GameStatus::Final => format!(
            "Game Status: {}\n{} vs {}\nFinal Score: {}-{}\nStart Time: {}\nChannel: {}\n",
            game.status.label(),
            away,
            home,
            score(game.away_team_score),
            score(game.home_team_score),
            start,
            channel
        ),
        GameStatus::InProgress => format!(
            "Game Status: {}\n{} vs {}\nCurrent Score: {}-{}\nChannel: {}\n",
            game.status.label(),
            away,
            home,
            score(game.away_team_score),
            score(game.home_team_score),
            channel
        ),
        GameStatus::Scheduled => format!(
            "Game Status: {}\n{} vs {}\nStart Time: {}\nChannel: {}\n",
            game.status.label(),
            away,
            home,
            start,
            channel
        ),
        GameStatus::Other => format!(
            "Game Status: {}\n{} vs {}\nDetails are unavailable.\n",
            game.status.label(),
            away,
            home
        ),
    }
}

/// Join every game's block into one digest body, preserving input order.
/// An empty day yields the fixed fallback sentence, never an empty string.
pub fn daily_digest(games: &[GameRecord]) -> String {
    if games.is_empty() {
        return NO_GAMES_MESSAGE.to_string();
    }
    games
        .iter()
        .map(game_summary)
        .collect::<Vec<String>>()
        .join(GAME_SEPARATOR)
}
