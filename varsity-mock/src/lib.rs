//! Mock source for CI-safe examples and integration tests. Provides
//! deterministic data from static fixtures — no network, no flakiness.

use async_trait::async_trait;
use chrono::NaiveDate;

use varsity_core::{
    ScoreboardProvider, SportsSource, StandingsProvider, SummaryProvider, VarsityError,
};
use varsity_types::{Boxscore, Game, Highlight, Sport, Standings};

mod fixtures;

/// Fixture-backed source. Supports every sport and every capability.
pub struct MockSource;

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// A new mock source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StandingsProvider for MockSource {
    async fn standings(&self, sport: Sport) -> Result<Standings, VarsityError> {
        Ok(fixtures::standings::for_sport(sport))
    }
}

#[async_trait]
impl ScoreboardProvider for MockSource {
    async fn scoreboard(&self, sport: Sport, date: NaiveDate) -> Result<Vec<Game>, VarsityError> {
        Ok(fixtures::games::on_day(sport, date))
    }
}

#[async_trait]
impl SummaryProvider for MockSource {
    async fn highlights(
        &self,
        sport: Sport,
        event_id: &str,
    ) -> Result<Vec<Highlight>, VarsityError> {
        Ok(fixtures::games::highlights(sport, event_id))
    }

    async fn boxscore(&self, sport: Sport, event_id: &str) -> Result<Boxscore, VarsityError> {
        if sport != Sport::Nfl {
            return Err(VarsityError::unsupported("summary/boxscore"));
        }
        fixtures::games::boxscore(event_id)
            .ok_or_else(|| VarsityError::empty("varsity-mock"))
    }
}

impl SportsSource for MockSource {
    fn name(&self) -> &'static str {
        "varsity-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn supports_sport(&self, _sport: Sport) -> bool {
        true
    }

    fn as_standings_provider(&self) -> Option<&dyn StandingsProvider> {
        Some(self)
    }

    fn as_scoreboard_provider(&self) -> Option<&dyn ScoreboardProvider> {
        Some(self)
    }

    fn as_summary_provider(&self) -> Option<&dyn SummaryProvider> {
        Some(self)
    }
}
