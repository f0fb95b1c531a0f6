use serde::{Deserialize, Serialize};

use crate::{Boxscore, Sport};

/// Lifecycle state of a game. Only [`GameState::Final`] games are surfaced
/// by recent-games queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameState {
    /// Not yet started.
    Scheduled,
    /// Currently being played.
    InProgress,
    /// Completed.
    Final,
}

/// A short highlight attached to a completed game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// Headline text.
    pub title: String,
    /// Longer description; may be empty.
    pub description: String,
}

/// A single game in the canonical model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// Provider event id; empty when the provider supplied none.
    pub id: String,
    /// ISO-8601 date string as supplied by the provider.
    pub date: String,
    /// Sport this game belongs to.
    pub sport: Sport,
    /// Canonical display name of the first listed team.
    pub team1: String,
    /// Canonical display name of the second listed team.
    pub team2: String,
    /// Final score of `team1`; 0 when the provider sent a placeholder.
    pub score1: u32,
    /// Final score of `team2`; 0 when the provider sent a placeholder.
    pub score2: u32,
    /// Winning team's display name, when derivable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    /// Lifecycle state.
    pub state: GameState,
    /// Highlights, provider order, at most 5 after enrichment.
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    /// Structured box score (NFL only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boxscore: Option<Boxscore>,
}

impl Game {
    /// Derive the winner from the scores.
    ///
    /// Returns `None` when the scores are equal or either side still holds
    /// the zero placeholder — a 0 score is indistinguishable from "not
    /// reported", so no winner is claimed.
    #[must_use]
    pub fn derived_winner(&self) -> Option<String> {
        if self.score1 == 0 || self.score2 == 0 || self.score1 == self.score2 {
            return None;
        }
        if self.score1 > self.score2 {
            Some(self.team1.clone())
        } else {
            Some(self.team2.clone())
        }
    }
}
