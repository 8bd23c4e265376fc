use std::cell::{Cell, RefCell};

use chrono::{NaiveDate, TimeZone, Utc};

use nba_scores_lambda_rust::format::{NO_GAMES_MESSAGE, SUBJECT};
use nba_scores_lambda_rust::handler::{run, Request, Response, ScoreSource, TopicPublisher};
use nba_scores_lambda_rust::model::game::GameRecord;
use nba_scores_lambda_rust::model::status::GameStatus;

struct FakeSource {
    result: Result<Vec<GameRecord>, String>,
    requested_date: Cell<Option<NaiveDate>>,
}

impl ScoreSource for FakeSource {
    fn games_by_date(&self, date: NaiveDate) -> Result<Vec<GameRecord>, String> {
        self.requested_date.set(Some(date));
        self.result.clone()
    }
}

struct FakePublisher {
    fail_with: Option<String>,
    published: RefCell<Vec<(String, String)>>,
}

impl FakePublisher {
    fn new() -> Self {
        Self { fail_with: None, published: RefCell::new(Vec::new()) }
    }

    fn failing(message: &str) -> Self {
        Self { fail_with: Some(message.to_string()), published: RefCell::new(Vec::new()) }
    }
}

impl TopicPublisher for FakePublisher {
    fn publish(&self, subject: &str, body: &str) -> Result<(), String> {
        if let Some(e) = &self.fail_with {
            return Err(e.clone());
        }
        self.published.borrow_mut().push((subject.to_string(), body.to_string()));
        Ok(())
    }
}

fn final_game() -> GameRecord {
    GameRecord {
        status: GameStatus::Final,
        away_team: Some("Warriors".to_string()),
        home_team: Some("Lakers".to_string()),
        away_team_score: Some(98),
        home_team_score: Some(102),
        date_time: Some("2024-02-08T19:30:00Z".to_string()),
        channel: Some("ESPN".to_string()),
    }
}

#[test]
fn successful_run_publishes_digest_with_subject() {
    let source = FakeSource {
        result: Ok(vec![final_game()]),
        requested_date: Cell::new(None),
    };
    let publisher = FakePublisher::new();
    let now = Utc.with_ymd_and_hms(2024, 2, 8, 20, 0, 0).unwrap();

    let resp = run(&source, &publisher, now);

    assert_eq!(resp.status_code, 200);
    let published = publisher.published.borrow();
    assert_eq!(published.len(), 1);
    let (subject, body) = &published[0];
    assert_eq!(subject, SUBJECT);
    assert!(body.contains("Warriors vs Lakers"), "body was: {}", body);
}

#[test]
fn run_requests_game_day_adjusted_for_offset() {
    let source = FakeSource {
        result: Ok(vec![]),
        requested_date: Cell::new(None),
    };
    let publisher = FakePublisher::new();
    // 02:00 UTC on Feb 9 is still the Feb 8 game day
    let now = Utc.with_ymd_and_hms(2024, 2, 9, 2, 0, 0).unwrap();

    run(&source, &publisher, now);

    assert_eq!(
        source.requested_date.get(),
        Some(NaiveDate::from_ymd_opt(2024, 2, 8).unwrap())
    );
}

#[test]
fn empty_day_still_publishes_fallback_message() {
    let source = FakeSource {
        result: Ok(vec![]),
        requested_date: Cell::new(None),
    };
    let publisher = FakePublisher::new();

    let resp = run(&source, &publisher, Utc::now());

    assert_eq!(resp.status_code, 200);
    let published = publisher.published.borrow();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].1, NO_GAMES_MESSAGE);
}

#[test]
fn fetch_failure_returns_500_without_publishing() {
    let source = FakeSource {
        result: Err("HTTP 500 from upstream".to_string()),
        requested_date: Cell::new(None),
    };
    let publisher = FakePublisher::new();

    let resp = run(&source, &publisher, Utc::now());

    assert_eq!(resp.status_code, 500);
    assert!(resp.body.contains("Failed to fetch games"), "body was: {}", resp.body);
    assert!(publisher.published.borrow().is_empty(), "publisher must not be called");
}

#[test]
fn publish_failure_returns_500_naming_publish_error() {
    let source = FakeSource {
        result: Ok(vec![final_game()]),
        requested_date: Cell::new(None),
    };
    let publisher = FakePublisher::failing("topic rejected the message");

    let resp = run(&source, &publisher, Utc::now());

    assert_eq!(resp.status_code, 500);
    assert!(
        resp.body.contains("Failed to publish notification"),
        "body was: {}",
        resp.body
    );
    assert!(resp.body.contains("topic rejected the message"), "body was: {}", resp.body);
}

#[test]
fn request_deserializes_from_empty_payload() {
    let req: Request = serde_json::from_str("{}").expect("empty object should deserialize");
    let _ = req;
}

#[test]
fn response_serializes_status_and_body() {
    let resp = Response { status_code: 200, body: "Notification sent for 2024-02-08".to_string() };
    let json = serde_json::to_value(&resp).unwrap();
    assert_eq!(json["status_code"], 200);
    assert_eq!(json["body"], "Notification sent for 2024-02-08");
}
