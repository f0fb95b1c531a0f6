use async_trait::async_trait;
use chrono::NaiveDate;

use crate::VarsityError;
pub use varsity_types::SourceKey;
use varsity_types::{Boxscore, Game, Highlight, Sport, Standings};

/// Focused role trait for sources that provide league standings.
#[async_trait]
pub trait StandingsProvider: Send + Sync {
    /// Fetch a standings snapshot for the given sport.
    ///
    /// One attempt, no retries; the orchestrator bounds the call with a
    /// timeout. Returning a snapshot with zero teams counts as a failure
    /// for chain-advancement purposes.
    async fn standings(&self, sport: Sport) -> Result<Standings, VarsityError>;
}

/// Focused role trait for sources that provide a per-day scoreboard.
#[async_trait]
pub trait ScoreboardProvider: Send + Sync {
    /// Fetch all games on the given calendar day, any state.
    async fn scoreboard(&self, sport: Sport, date: NaiveDate) -> Result<Vec<Game>, VarsityError>;
}

/// Focused role trait for sources that provide per-game summaries
/// (highlights, box scores) keyed by event id.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Fetch highlight entries for a completed game, provider order,
    /// uncapped — the enrichment merger applies the cap.
    async fn highlights(
        &self,
        sport: Sport,
        event_id: &str,
    ) -> Result<Vec<Highlight>, VarsityError>;

    /// Fetch a structured box score for a completed game.
    ///
    /// Default returns `unsupported`; only sources with structured per-game
    /// statistics (currently NFL summaries) override this.
    async fn boxscore(&self, sport: Sport, event_id: &str) -> Result<Boxscore, VarsityError> {
        let _ = (sport, event_id);
        Err(VarsityError::unsupported("summary/boxscore"))
    }
}

/// Main source trait implemented by provider crates. Exposes capability
/// discovery via `as_*_provider` accessors.
pub trait SportsSource: Send + Sync {
    /// A stable identifier for chain configuration (e.g. "espn-cdn").
    fn name(&self) -> &'static str;

    /// Canonical source key constructed from the static name.
    fn key(&self) -> SourceKey {
        SourceKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Whether this source *claims* to cover a given sport.
    ///
    /// Default: `false` for all sports. Sources must explicitly override
    /// this to declare coverage.
    fn supports_sport(&self, sport: Sport) -> bool {
        let _ = sport;
        false
    }

    /// Advertise standings capability by returning a usable trait object.
    fn as_standings_provider(&self) -> Option<&dyn StandingsProvider> {
        None
    }

    /// Advertise scoreboard capability by returning a usable trait object.
    fn as_scoreboard_provider(&self) -> Option<&dyn ScoreboardProvider> {
        None
    }

    /// Advertise per-game summary capability by returning a usable trait object.
    fn as_summary_provider(&self) -> Option<&dyn SummaryProvider> {
        None
    }
}
