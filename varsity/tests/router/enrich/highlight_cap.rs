use varsity::{GameState, Resolved, Sport, Varsity};

use crate::helpers::{self, MockSource};

#[tokio::test]
async fn six_provider_highlights_become_exactly_five_in_order() {
    helpers::init_tracing();
    let source = MockSource::builder()
        .name("sb")
        .with_scoreboard_fn(|sport, date| {
            Ok(vec![helpers::game(
                sport,
                "401",
                &format!("{date}T18:00Z"),
                ("Boston Celtics", "New York Knicks"),
                (112, 104),
                GameState::Final,
            )])
        })
        .with_highlights_fn(|_, event_id| {
            assert_eq!(event_id, "401");
            Ok((0..6).map(helpers::highlight).collect())
        })
        .build();

    let engine = Varsity::builder()
        .with_source(source.clone())
        .build()
        .unwrap();

    match engine.recent_games_within(Sport::Nba, 1).await {
        Resolved::Data { data, .. } => {
            let game = &data[0];
            assert_eq!(game.highlights.len(), 5);
            for (i, h) in game.highlights.iter().enumerate() {
                assert_eq!(h.title, format!("highlight {i}"), "provider order preserved");
            }
        }
        Resolved::Unavailable => panic!("expected data"),
    }
    assert_eq!(source.highlights_call_count(), 1);
}

#[tokio::test]
async fn empty_highlights_are_a_valid_answer() {
    helpers::init_tracing();
    let source = MockSource::builder()
        .name("sb")
        .with_scoreboard_fn(|sport, date| {
            Ok(vec![helpers::game(
                sport,
                "501",
                &format!("{date}T18:00Z"),
                ("A", "B"),
                (4, 2),
                GameState::Final,
            )])
        })
        .returns_highlights_ok(vec![])
        .build();

    let engine = Varsity::builder().with_source(source).build().unwrap();
    let data = engine
        .recent_games_within(Sport::Nhl, 1)
        .await
        .into_data()
        .unwrap();
    assert!(data[0].highlights.is_empty());
}
