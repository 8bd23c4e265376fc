use std::env;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::format::{self, SUBJECT};
use crate::model::game::GameRecord;
use crate::sportsdata::{self, SportsData};
use crate::topic::Topic;

/// Configuration read from the process environment at invocation start.
/// Absent variables are not validated here; empty values flow into the
/// outbound calls and surface as fetch/publish failures.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub topic_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("SPORTSDATA_API_KEY").unwrap_or_default(),
            topic_url: env::var("NOTIFICATION_TOPIC_URL").unwrap_or_default(),
        }
    }
}

/// Source of one day's game records. `SportsData` is the real one; tests
/// substitute fakes so the pipeline runs without network access.
pub trait ScoreSource {
    fn games_by_date(&self, date: NaiveDate) -> Result<Vec<GameRecord>, String>;
}

impl ScoreSource for SportsData {
    fn games_by_date(&self, date: NaiveDate) -> Result<Vec<GameRecord>, String> {
        SportsData::games_by_date(self, date)
    }
}

/// Destination for the formatted digest.
pub trait TopicPublisher {
    fn publish(&self, subject: &str, body: &str) -> Result<(), String>;
}

impl TopicPublisher for Topic {
    fn publish(&self, subject: &str, body: &str) -> Result<(), String> {
        Topic::publish(self, subject, body)
    }
}

/// The only two failure kinds of an invocation. Neither propagates past the
/// entry point; both become a status-500 response.
#[derive(Debug)]
pub enum PipelineError {
    Fetch(String),
    Publish(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Fetch(e) => write!(f, "Failed to fetch games: {}", e),
            PipelineError::Publish(e) => write!(f, "Failed to publish notification: {}", e),
        }
    }
}

/// The scheduler trigger carries no meaningful payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Request {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub status_code: u16,
    pub body: String,
}

fn run_pipeline(
    source: &dyn ScoreSource,
    topic: &dyn TopicPublisher,
    now_utc: DateTime<Utc>,
) -> Result<String, PipelineError> {
    let date = sportsdata::game_day(now_utc);
    let games = source.games_by_date(date).map_err(PipelineError::Fetch)?;
    let body = format::daily_digest(&games);
    info!(date = %date, game_count = games.len(), "Prepared digest message");
    topic.publish(SUBJECT, &body).map_err(PipelineError::Publish)?;
    Ok(format!("Notification sent for {}", date))
}

/// Fetch the day's games, format the digest, publish it. Fetch failure
/// halts the run before any publish call; both failure kinds come back as
/// a status-500 response.
pub fn run(
    source: &dyn ScoreSource,
    topic: &dyn TopicPublisher,
    now_utc: DateTime<Utc>,
) -> Response {
    match run_pipeline(source, topic, now_utc) {
        Ok(msg) => {
            info!(message = %msg, "Invocation succeeded");
            Response { status_code: 200, body: msg }
        }
        Err(e) => {
            error!(error = %e, "Invocation failed");
            Response { status_code: 500, body: e.to_string() }
        }
    }
}

#[instrument(skip(_event))]
pub async fn handler(_event: LambdaEvent<Request>) -> Result<Response, Error> {
    let config = Config::from_env();

    let sports_data = SportsData::new(config.api_key);
    let topic = Topic::new(config.topic_url);

    Ok(run(&sports_data, &topic, Utc::now()))
}
