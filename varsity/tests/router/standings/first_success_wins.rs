use varsity::{Resolved, Sport, Varsity};

use crate::helpers::{self, MockSource};

#[tokio::test]
async fn winning_output_is_returned_untouched_and_later_sources_never_run() {
    helpers::init_tracing();
    let alpha_data = helpers::standings_of(
        Sport::Nba,
        "East",
        &[("Boston Celtics", 60, 22), ("New York Knicks", 51, 31)],
    );
    let alpha = MockSource::builder()
        .name("alpha")
        .returns_standings_ok(alpha_data.clone())
        .build();
    // Beta would also answer, with different data — it must not matter.
    let beta = MockSource::builder()
        .name("beta")
        .returns_standings_ok(helpers::standings_of(
            Sport::Nba,
            "East",
            &[("Cleveland Cavaliers", 55, 27)],
        ))
        .build();

    let engine = Varsity::builder()
        .with_source(alpha.clone())
        .with_source(beta.clone())
        .build()
        .unwrap();

    match engine.standings(Sport::Nba).await {
        Resolved::Data { source, data } => {
            assert_eq!(source.as_str(), "alpha");
            assert_eq!(data, alpha_data);
        }
        Resolved::Unavailable => panic!("expected data"),
    }
    assert_eq!(alpha.standings_call_count(), 1);
    assert_eq!(beta.standings_call_count(), 0);
}
