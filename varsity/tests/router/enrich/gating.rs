use varsity::{GameState, Resolved, Sport, Varsity};

use crate::helpers::{self, MockSource};

#[tokio::test]
async fn games_without_an_id_are_surfaced_but_not_enriched() {
    helpers::init_tracing();
    let source = MockSource::builder()
        .name("sb")
        .with_scoreboard_fn(|sport, date| {
            Ok(vec![helpers::game(
                sport,
                "",
                &format!("{date}T18:00Z"),
                ("Home", "Away"),
                (3, 0),
                GameState::Final,
            )])
        })
        .returns_highlights_ok(vec![helpers::highlight(0)])
        .build();

    let engine = Varsity::builder()
        .with_source(source.clone())
        .build()
        .unwrap();

    match engine.recent_games_within(Sport::Nhl, 1).await {
        Resolved::Data { data, .. } => {
            assert_eq!(data.len(), 1);
            assert!(data[0].highlights.is_empty());
        }
        Resolved::Unavailable => panic!("expected data"),
    }
    assert_eq!(source.highlights_call_count(), 0);
}

#[tokio::test]
async fn unfinished_games_are_dropped_before_enrichment() {
    helpers::init_tracing();
    let source = MockSource::builder()
        .name("sb")
        .with_scoreboard_fn(|sport, date| {
            Ok(vec![
                helpers::game(
                    sport,
                    "101",
                    &format!("{date}T18:00Z"),
                    ("A", "B"),
                    (0, 0),
                    GameState::Scheduled,
                ),
                helpers::game(
                    sport,
                    "102",
                    &format!("{date}T20:00Z"),
                    ("C", "D"),
                    (55, 48),
                    GameState::InProgress,
                ),
            ])
        })
        .returns_highlights_ok(vec![helpers::highlight(0)])
        .build();

    let engine = Varsity::builder()
        .with_source(source.clone())
        .build()
        .unwrap();

    let data = engine
        .recent_games_within(Sport::Nba, 1)
        .await
        .into_data()
        .unwrap();
    assert!(data.is_empty());
    assert_eq!(source.highlights_call_count(), 0);
}
