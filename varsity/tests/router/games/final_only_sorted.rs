use varsity::{GameState, Resolved, Sport, Varsity};

use crate::helpers::{self, MockSource};

#[tokio::test]
async fn only_final_games_surface_sorted_most_recent_first() {
    helpers::init_tracing();
    let source = MockSource::builder()
        .name("sb")
        .with_scoreboard_fn(|sport, date| {
            Ok(vec![
                helpers::game(
                    sport,
                    &format!("final-{date}"),
                    &format!("{date}T18:00Z"),
                    ("Home", "Away"),
                    (3, 1),
                    GameState::Final,
                ),
                helpers::game(
                    sport,
                    &format!("live-{date}"),
                    &format!("{date}T20:00Z"),
                    ("Third", "Fourth"),
                    (2, 2),
                    GameState::InProgress,
                ),
            ])
        })
        .build();

    let engine = Varsity::builder()
        .with_source(source.clone())
        .build()
        .unwrap();

    match engine.recent_games_within(Sport::Mlb, 3).await {
        Resolved::Data { source: key, data } => {
            assert_eq!(key.as_str(), "sb");
            assert_eq!(data.len(), 3, "one final game per queried day");
            assert!(data.iter().all(|g| g.state == GameState::Final));
            // Most recent day first.
            let dates: Vec<&str> = data.iter().map(|g| g.date.as_str()).collect();
            let mut sorted = dates.clone();
            sorted.sort_by(|a, b| b.cmp(a));
            assert_eq!(dates, sorted);
            assert_eq!(data[0].winner.as_deref(), Some("Home"));
        }
        Resolved::Unavailable => panic!("expected data"),
    }
    assert_eq!(source.scoreboard_call_count(), 3);
}

#[tokio::test]
async fn a_quiet_week_is_valid_empty_data_not_unavailable() {
    helpers::init_tracing();
    let source = MockSource::builder()
        .name("sb")
        .returns_scoreboard_ok(vec![])
        .build();

    let engine = Varsity::builder().with_source(source).build().unwrap();

    match engine.recent_games_within(Sport::Nhl, 5).await {
        Resolved::Data { data, .. } => assert!(data.is_empty()),
        Resolved::Unavailable => panic!("a well-formed empty week is still data"),
    }
}
