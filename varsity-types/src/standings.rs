use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Sport;

/// One team's row in a standings table.
///
/// `ties`, `overtime_losses`, and `points` are sport-specific: ties appear
/// for the NFL, overtime losses and points for the NHL. Absent means the
/// sport does not track the stat, not that it is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    /// Canonical display name produced by identity reconciliation.
    pub display_name: String,
    /// Regular-season wins.
    pub wins: u32,
    /// Regular-season losses.
    pub losses: u32,
    /// Ties (NFL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ties: Option<u32>,
    /// Overtime losses (NHL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime_losses: Option<u32>,
    /// Standings points (NHL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    /// Win percentage in `[0, 1]`, provider-supplied or derived — never both.
    pub win_percentage: f64,
    /// Games behind the group leader.
    pub games_back: f64,
    /// Group label this row belongs to (e.g. "AL", "East", "AFC").
    pub group: String,
}

impl TeamRecord {
    /// Derive a win percentage over `wins + losses + extra` games, where
    /// `extra` covers sport-specific extra outcomes (ties, overtime losses).
    ///
    /// Returns `0.0` when no games have been played. The stored value keeps
    /// full precision; rounding is a display concern.
    #[must_use]
    pub fn derived_win_percentage(wins: u32, losses: u32, extra: u32) -> f64 {
        let total = wins + losses + extra;
        if total == 0 {
            0.0
        } else {
            f64::from(wins) / f64::from(total)
        }
    }

    /// The value this row ranks by for the given sport: points for the NHL,
    /// win percentage otherwise.
    #[must_use]
    pub fn ranking_key(&self, sport: Sport) -> f64 {
        if sport.ranks_by_points() {
            f64::from(self.points.unwrap_or(0))
        } else {
            self.win_percentage
        }
    }
}

/// An ordered run of teams under one group label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsGroup {
    /// Conference/league/division label, e.g. "East", "AFC", "NL".
    pub label: String,
    /// Teams in ranking order (descending by the sport's ranking key).
    pub teams: Vec<TeamRecord>,
}

/// A full standings snapshot for one sport.
///
/// Constructed fresh per request by the winning adapter and never mutated
/// after it is returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standings {
    /// Sport these standings belong to.
    pub sport: Sport,
    /// Groups in display order.
    pub groups: Vec<StandingsGroup>,
    /// When this snapshot was assembled.
    pub fetched_at: DateTime<Utc>,
}

impl Standings {
    /// Create an empty snapshot stamped with the current time.
    #[must_use]
    pub fn new(sport: Sport) -> Self {
        Self {
            sport,
            groups: Vec::new(),
            fetched_at: Utc::now(),
        }
    }

    /// Append a team under `label`, creating the group on first use.
    pub fn push(&mut self, label: &str, team: TeamRecord) {
        if let Some(group) = self.groups.iter_mut().find(|g| g.label == label) {
            group.teams.push(team);
        } else {
            self.groups.push(StandingsGroup {
                label: label.to_string(),
                teams: vec![team],
            });
        }
    }

    /// Look up a group by label.
    #[must_use]
    pub fn group(&self, label: &str) -> Option<&StandingsGroup> {
        self.groups.iter().find(|g| g.label == label)
    }

    /// True when no group holds any team. An adapter returning an empty
    /// snapshot does not count as a success for chain resolution.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.teams.is_empty())
    }

    /// Total number of team rows across all groups.
    #[must_use]
    pub fn team_count(&self) -> usize {
        self.groups.iter().map(|g| g.teams.len()).sum()
    }

    /// Sort every group descending by the sport's ranking key.
    pub fn sort_by_ranking(&mut self) {
        let sport = self.sport;
        for group in &mut self.groups {
            group
                .teams
                .sort_by(|a, b| {
                    b.ranking_key(sport)
                        .partial_cmp(&a.ranking_key(sport))
                        .unwrap_or(core::cmp::Ordering::Equal)
                });
        }
    }
}
