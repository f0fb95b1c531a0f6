use chrono::{Days, Utc};

use varsity::{GameState, Resolved, Sport, Varsity, VarsityError};

use crate::helpers::{self, MockSource};

#[tokio::test]
async fn one_bad_day_does_not_fail_the_request() {
    helpers::init_tracing();
    let poisoned = Utc::now()
        .date_naive()
        .checked_sub_days(Days::new(2))
        .unwrap();
    let source = MockSource::builder()
        .name("sb")
        .with_scoreboard_fn(move |sport, date| {
            if date == poisoned {
                return Err(VarsityError::Network("socket hang up".to_string()));
            }
            Ok(vec![helpers::game(
                sport,
                &format!("g-{date}"),
                &format!("{date}T18:00Z"),
                ("Home", "Away"),
                (5, 3),
                GameState::Final,
            )])
        })
        .build();

    let engine = Varsity::builder()
        .with_source(source.clone())
        .build()
        .unwrap();

    match engine.recent_games_within(Sport::Mlb, 3).await {
        Resolved::Data { data, .. } => {
            assert_eq!(data.len(), 2, "the poisoned day contributes nothing");
        }
        Resolved::Unavailable => panic!("expected data"),
    }
    assert_eq!(source.scoreboard_call_count(), 3);
}

#[tokio::test]
async fn every_day_failing_is_unavailable() {
    helpers::init_tracing();
    let source = MockSource::builder()
        .name("sb")
        .with_scoreboard_fn(|_, _| Err(VarsityError::Network("down".to_string())))
        .build();

    let engine = Varsity::builder().with_source(source).build().unwrap();
    assert!(engine.recent_games_within(Sport::Nba, 4).await.is_unavailable());
}

#[tokio::test]
async fn a_failing_day_falls_back_to_the_next_source_for_that_day() {
    helpers::init_tracing();
    let flaky = MockSource::builder()
        .name("flaky")
        .with_scoreboard_fn(|_, _| Err(VarsityError::Network("down".to_string())))
        .build();
    let steady = MockSource::builder()
        .name("steady")
        .with_scoreboard_fn(|sport, date| {
            Ok(vec![helpers::game(
                sport,
                &format!("g-{date}"),
                &format!("{date}T18:00Z"),
                ("Home", "Away"),
                (2, 1),
                GameState::Final,
            )])
        })
        .build();

    let engine = Varsity::builder()
        .with_source(flaky.clone())
        .with_source(steady.clone())
        .build()
        .unwrap();

    match engine.recent_games_within(Sport::Nhl, 2).await {
        Resolved::Data { source, data } => {
            assert_eq!(source.as_str(), "steady");
            assert_eq!(data.len(), 2);
        }
        Resolved::Unavailable => panic!("expected data"),
    }
    // The flaky source was still tried first for each day.
    assert_eq!(flaky.scoreboard_call_count(), 2);
}
