#![allow(dead_code)]
#![allow(clippy::type_complexity)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::time::{Duration, sleep};

use varsity::{
    Boxscore, Game, Highlight, ScoreboardProvider, SportsSource, Standings, StandingsProvider,
    SummaryProvider, VarsityError,
};
use varsity_types::Sport;

type StandingsFn = dyn Fn(Sport) -> Result<Standings, VarsityError> + Send + Sync;
type ScoreboardFn = dyn Fn(Sport, NaiveDate) -> Result<Vec<Game>, VarsityError> + Send + Sync;
type HighlightsFn = dyn Fn(Sport, &str) -> Result<Vec<Highlight>, VarsityError> + Send + Sync;
type BoxscoreFn = dyn Fn(Sport, &str) -> Result<Boxscore, VarsityError> + Send + Sync;

/// Simple in-memory source used by integration tests. Behavior is driven
/// by optional closures; a missing closure means the capability is not
/// advertised at all. Call counters make never-called assertions possible.
pub struct MockSource {
    pub name: &'static str,
    pub sport_ok: Option<Sport>,
    pub delay_ms: u64,

    pub standings_fn: Option<Arc<StandingsFn>>,
    pub scoreboard_fn: Option<Arc<ScoreboardFn>>,
    pub highlights_fn: Option<Arc<HighlightsFn>>,
    pub boxscore_fn: Option<Arc<BoxscoreFn>>,

    pub standings_calls: AtomicUsize,
    pub scoreboard_calls: AtomicUsize,
    pub highlights_calls: AtomicUsize,
    pub boxscore_calls: AtomicUsize,
}

impl MockSource {
    pub fn builder() -> MockSourceBuilder {
        MockSourceBuilder::new()
    }

    pub fn standings_call_count(&self) -> usize {
        self.standings_calls.load(Ordering::SeqCst)
    }

    pub fn scoreboard_call_count(&self) -> usize {
        self.scoreboard_calls.load(Ordering::SeqCst)
    }

    pub fn highlights_call_count(&self) -> usize {
        self.highlights_calls.load(Ordering::SeqCst)
    }

    pub fn boxscore_call_count(&self) -> usize {
        self.boxscore_calls.load(Ordering::SeqCst)
    }

    async fn pause(&self) {
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }
}

#[async_trait]
impl StandingsProvider for MockSource {
    async fn standings(&self, sport: Sport) -> Result<Standings, VarsityError> {
        self.standings_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        match &self.standings_fn {
            Some(f) => (f)(sport),
            None => Err(VarsityError::unsupported("standings")),
        }
    }
}

#[async_trait]
impl ScoreboardProvider for MockSource {
    async fn scoreboard(&self, sport: Sport, date: NaiveDate) -> Result<Vec<Game>, VarsityError> {
        self.scoreboard_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        match &self.scoreboard_fn {
            Some(f) => (f)(sport, date),
            None => Err(VarsityError::unsupported("scoreboard")),
        }
    }
}

#[async_trait]
impl SummaryProvider for MockSource {
    async fn highlights(
        &self,
        sport: Sport,
        event_id: &str,
    ) -> Result<Vec<Highlight>, VarsityError> {
        self.highlights_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        match &self.highlights_fn {
            Some(f) => (f)(sport, event_id),
            None => Err(VarsityError::unsupported("summary/highlights")),
        }
    }

    async fn boxscore(&self, sport: Sport, event_id: &str) -> Result<Boxscore, VarsityError> {
        self.boxscore_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        match &self.boxscore_fn {
            Some(f) => (f)(sport, event_id),
            None => Err(VarsityError::unsupported("summary/boxscore")),
        }
    }
}

impl SportsSource for MockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn supports_sport(&self, sport: Sport) -> bool {
        self.sport_ok.is_none_or(|s| s == sport)
    }

    fn as_standings_provider(&self) -> Option<&dyn StandingsProvider> {
        self.standings_fn.as_ref().map(|_| self as &dyn StandingsProvider)
    }

    fn as_scoreboard_provider(&self) -> Option<&dyn ScoreboardProvider> {
        self.scoreboard_fn.as_ref().map(|_| self as &dyn ScoreboardProvider)
    }

    fn as_summary_provider(&self) -> Option<&dyn SummaryProvider> {
        if self.highlights_fn.is_some() || self.boxscore_fn.is_some() {
            Some(self as &dyn SummaryProvider)
        } else {
            None
        }
    }
}

/* ---------- Tiny builder used by tests ---------- */

pub struct MockSourceBuilder {
    name: &'static str,
    sport_ok: Option<Sport>,
    delay_ms: u64,
    standings_fn: Option<Arc<StandingsFn>>,
    scoreboard_fn: Option<Arc<ScoreboardFn>>,
    highlights_fn: Option<Arc<HighlightsFn>>,
    boxscore_fn: Option<Arc<BoxscoreFn>>,
}

impl MockSourceBuilder {
    pub fn new() -> Self {
        Self {
            name: "mock",
            sport_ok: None,
            delay_ms: 0,
            standings_fn: None,
            scoreboard_fn: None,
            highlights_fn: None,
            boxscore_fn: None,
        }
    }

    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn only_sport(mut self, sport: Sport) -> Self {
        self.sport_ok = Some(sport);
        self
    }

    pub fn delay(mut self, d: Duration) -> Self {
        self.delay_ms = d.as_millis() as u64;
        self
    }

    pub fn with_standings_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(Sport) -> Result<Standings, VarsityError> + Send + Sync + 'static,
    {
        self.standings_fn = Some(Arc::new(f));
        self
    }

    pub fn returns_standings_ok(self, standings: Standings) -> Self {
        self.with_standings_fn(move |_| Ok(standings.clone()))
    }

    pub fn fails_standings(self, msg: &'static str) -> Self {
        self.with_standings_fn(move |_| Err(VarsityError::Network(msg.to_string())))
    }

    pub fn with_scoreboard_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(Sport, NaiveDate) -> Result<Vec<Game>, VarsityError> + Send + Sync + 'static,
    {
        self.scoreboard_fn = Some(Arc::new(f));
        self
    }

    pub fn returns_scoreboard_ok(self, games: Vec<Game>) -> Self {
        self.with_scoreboard_fn(move |_, _| Ok(games.clone()))
    }

    pub fn with_highlights_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(Sport, &str) -> Result<Vec<Highlight>, VarsityError> + Send + Sync + 'static,
    {
        self.highlights_fn = Some(Arc::new(f));
        self
    }

    pub fn returns_highlights_ok(self, highlights: Vec<Highlight>) -> Self {
        self.with_highlights_fn(move |_, _| Ok(highlights.clone()))
    }

    pub fn with_boxscore_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(Sport, &str) -> Result<Boxscore, VarsityError> + Send + Sync + 'static,
    {
        self.boxscore_fn = Some(Arc::new(f));
        self
    }

    pub fn returns_boxscore_ok(self, boxscore: Boxscore) -> Self {
        self.with_boxscore_fn(move |_, _| Ok(boxscore.clone()))
    }

    pub fn build(self) -> Arc<MockSource> {
        Arc::new(MockSource {
            name: self.name,
            sport_ok: self.sport_ok,
            delay_ms: self.delay_ms,
            standings_fn: self.standings_fn,
            scoreboard_fn: self.scoreboard_fn,
            highlights_fn: self.highlights_fn,
            boxscore_fn: self.boxscore_fn,
            standings_calls: AtomicUsize::new(0),
            scoreboard_calls: AtomicUsize::new(0),
            highlights_calls: AtomicUsize::new(0),
            boxscore_calls: AtomicUsize::new(0),
        })
    }
}
