use core::fmt;

use serde::{Deserialize, Serialize};

/// The four supported leagues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    /// National Basketball Association.
    Nba,
    /// National Football League.
    Nfl,
    /// Major League Baseball.
    Mlb,
    /// National Hockey League.
    Nhl,
}

impl Sport {
    /// All supported sports, in display order.
    pub const ALL: [Self; 4] = [Self::Nba, Self::Nfl, Self::Mlb, Self::Nhl];

    /// Stable lowercase identifier used in provider URLs and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nba => "nba",
            Self::Nfl => "nfl",
            Self::Mlb => "mlb",
            Self::Nhl => "nhl",
        }
    }

    /// Whether standings for this sport rank by points rather than win
    /// percentage (NHL only).
    #[must_use]
    pub const fn ranks_by_points(self) -> bool {
        matches!(self, Self::Nhl)
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The data categories the engine can resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// League standings, grouped by conference/league.
    Standings,
    /// Recently completed games, with enrichment.
    RecentGames,
}

impl Category {
    /// Stable kebab-case identifier for logs and errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standings => "standings",
            Self::RecentGames => "recent-games",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
