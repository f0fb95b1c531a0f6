use varsity::{Boxscore, GameState, PassingLine, Sport, Varsity, VarsityError};

use crate::helpers::{self, MockSource};

fn tiny_boxscore() -> Boxscore {
    let mut b = Boxscore::default();
    b.passing.team1.push(PassingLine {
        name: "Josh Allen".to_string(),
        completions: 24,
        attempts: 35,
        yards: 288,
        touchdowns: 3,
        interceptions: 1,
        rating: 112.4,
    });
    b
}

fn nfl_scoreboard_source(name: &'static str) -> crate::helpers::mock_source::MockSourceBuilder {
    MockSource::builder().name(name).with_scoreboard_fn(|sport, date| {
        Ok(vec![helpers::game(
            sport,
            "401",
            &format!("{date}T18:00Z"),
            ("Buffalo Bills", "Miami Dolphins"),
            (31, 10),
            GameState::Final,
        )])
    })
}

#[tokio::test]
async fn final_nfl_games_get_a_boxscore() {
    helpers::init_tracing();
    let source = nfl_scoreboard_source("sb")
        .returns_highlights_ok(vec![helpers::highlight(0)])
        .returns_boxscore_ok(tiny_boxscore())
        .build();

    let engine = Varsity::builder()
        .with_source(source.clone())
        .build()
        .unwrap();

    let data = engine
        .recent_games_within(Sport::Nfl, 1)
        .await
        .into_data()
        .unwrap();
    let boxscore = data[0].boxscore.as_ref().expect("boxscore attached");
    assert_eq!(boxscore.passing.team1[0].name, "Josh Allen");
    assert_eq!(source.boxscore_call_count(), 1);
}

#[tokio::test]
async fn non_nfl_games_never_ask_for_a_boxscore() {
    helpers::init_tracing();
    let source = MockSource::builder()
        .name("sb")
        .with_scoreboard_fn(|sport, date| {
            Ok(vec![helpers::game(
                sport,
                "601",
                &format!("{date}T18:00Z"),
                ("New York Yankees", "Boston Red Sox"),
                (5, 3),
                GameState::Final,
            )])
        })
        .returns_highlights_ok(vec![])
        .returns_boxscore_ok(tiny_boxscore())
        .build();

    let engine = Varsity::builder()
        .with_source(source.clone())
        .build()
        .unwrap();

    let data = engine
        .recent_games_within(Sport::Mlb, 1)
        .await
        .into_data()
        .unwrap();
    assert!(data[0].boxscore.is_none());
    assert_eq!(source.boxscore_call_count(), 0);
}

#[tokio::test]
async fn highlight_failure_advances_to_the_next_summary_source() {
    helpers::init_tracing();
    let moody = nfl_scoreboard_source("moody")
        .with_highlights_fn(|_, _| Err(VarsityError::Network("summary down".to_string())))
        .build();
    let backup = MockSource::builder()
        .name("backup")
        .returns_highlights_ok(vec![helpers::highlight(7)])
        .build();

    let engine = Varsity::builder()
        .with_source(moody.clone())
        .with_source(backup.clone())
        .build()
        .unwrap();

    let data = engine
        .recent_games_within(Sport::Nfl, 1)
        .await
        .into_data()
        .unwrap();
    assert_eq!(data[0].highlights[0].title, "highlight 7");
    assert_eq!(moody.highlights_call_count(), 1);
    assert_eq!(backup.highlights_call_count(), 1);
}

#[tokio::test]
async fn boxscore_failure_degrades_the_game_without_advancing_the_chain() {
    helpers::init_tracing();
    let primary = nfl_scoreboard_source("primary")
        .returns_highlights_ok(vec![helpers::highlight(1)])
        .with_boxscore_fn(|_, _| Err(VarsityError::schema("boxscore section missing")))
        .build();
    let backup = MockSource::builder()
        .name("backup")
        .returns_highlights_ok(vec![helpers::highlight(9)])
        .returns_boxscore_ok(tiny_boxscore())
        .build();

    let engine = Varsity::builder()
        .with_source(primary.clone())
        .with_source(backup.clone())
        .build()
        .unwrap();

    let data = engine
        .recent_games_within(Sport::Nfl, 1)
        .await
        .into_data()
        .unwrap();
    // Highlights from the source that answered; the box-score miss only
    // degrades this game.
    assert_eq!(data[0].highlights[0].title, "highlight 1");
    assert!(data[0].boxscore.is_none());
    assert_eq!(backup.highlights_call_count(), 0);
    assert_eq!(backup.boxscore_call_count(), 0);
}
