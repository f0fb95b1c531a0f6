use varsity::{Category, Resolved, SourceKey, Sport, Varsity, VarsityError};

use crate::helpers::{self, MockSource};

#[tokio::test]
async fn build_without_sources_is_rejected() {
    let err = Varsity::builder().build().unwrap_err();
    assert!(matches!(err, VarsityError::InvalidArg(_)));
}

#[tokio::test]
async fn unknown_chain_keys_are_dropped_at_build_time() {
    helpers::init_tracing();
    let alpha = MockSource::builder()
        .name("alpha")
        .returns_standings_ok(helpers::standings_of(
            Sport::Nba,
            "East",
            &[("Boston Celtics", 60, 22)],
        ))
        .build();

    // The chain names a source that was never registered (plus a duplicate);
    // both are filtered out, leaving alpha to serve.
    let engine = Varsity::builder()
        .with_source(alpha.clone())
        .chain_keys(
            Sport::Nba,
            Category::Standings,
            &[
                SourceKey::new("ghost"),
                SourceKey::new("alpha"),
                SourceKey::new("alpha"),
            ],
        )
        .build()
        .unwrap();

    let resolved = engine.standings(Sport::Nba).await;
    assert_eq!(resolved.source().map(SourceKey::as_str), Some("alpha"));
    assert_eq!(alpha.standings_call_count(), 1);
}

#[tokio::test]
async fn chain_override_reorders_sources() {
    helpers::init_tracing();
    let alpha = MockSource::builder()
        .name("alpha")
        .returns_standings_ok(helpers::standings_of(
            Sport::Mlb,
            "AL",
            &[("New York Yankees", 94, 68)],
        ))
        .build();
    let beta = MockSource::builder()
        .name("beta")
        .returns_standings_ok(helpers::standings_of(
            Sport::Mlb,
            "AL",
            &[("Houston Astros", 88, 74)],
        ))
        .build();

    let engine = Varsity::builder()
        .with_source(alpha.clone())
        .with_source(beta.clone())
        .chain_keys(
            Sport::Mlb,
            Category::Standings,
            &[SourceKey::new("beta"), SourceKey::new("alpha")],
        )
        .build()
        .unwrap();

    match engine.standings(Sport::Mlb).await {
        Resolved::Data { source, data } => {
            assert_eq!(source.as_str(), "beta");
            assert_eq!(data.group("AL").unwrap().teams[0].display_name, "Houston Astros");
        }
        Resolved::Unavailable => panic!("expected data"),
    }
    assert_eq!(alpha.standings_call_count(), 0);
}
