use serde::{Deserialize, Serialize};

/// Which side of a game a box-score entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamSide {
    /// The game's `team1`.
    Team1,
    /// The game's `team2`.
    Team2,
}

/// A pair of values split by team side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamSplit<T> {
    /// Value for the game's `team1`.
    pub team1: T,
    /// Value for the game's `team2`.
    pub team2: T,
}

impl<T> TeamSplit<T> {
    /// Mutable access to one side.
    pub fn side_mut(&mut self, side: TeamSide) -> &mut T {
        match side {
            TeamSide::Team1 => &mut self.team1,
            TeamSide::Team2 => &mut self.team2,
        }
    }

    /// Shared access to one side.
    pub fn side(&self, side: TeamSide) -> &T {
        match side {
            TeamSide::Team1 => &self.team1,
            TeamSide::Team2 => &self.team2,
        }
    }
}

/// Team-level aggregate stats. Placeholder values (`"-"`) normalize to 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStatLine {
    /// Total offensive yards.
    pub total_yards: i32,
    /// Net passing yards.
    pub passing_yards: i32,
    /// Rushing yards.
    pub rushing_yards: i32,
    /// Turnovers committed.
    pub turnovers: u32,
}

/// One quarterback's passing line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassingLine {
    /// Player display name.
    pub name: String,
    /// Completions.
    pub completions: u32,
    /// Attempts.
    pub attempts: u32,
    /// Passing yards (can be negative).
    pub yards: i32,
    /// Passing touchdowns.
    pub touchdowns: u32,
    /// Interceptions thrown.
    pub interceptions: u32,
    /// Passer rating; 0 when the provider omitted it.
    pub rating: f64,
}

/// One rusher's line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RushingLine {
    /// Player display name.
    pub name: String,
    /// Carries.
    pub carries: u32,
    /// Rushing yards (can be negative).
    pub yards: i32,
    /// Yards per carry; 0 when the provider omitted it.
    pub avg: f64,
    /// Rushing touchdowns.
    pub touchdowns: u32,
    /// Longest run.
    pub long: i32,
}

/// One receiver's line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceivingLine {
    /// Player display name.
    pub name: String,
    /// Receptions.
    pub receptions: u32,
    /// Receiving yards (can be negative).
    pub yards: i32,
    /// Yards per reception.
    pub avg: f64,
    /// Longest reception.
    pub long: i32,
    /// Receiving touchdowns.
    pub touchdowns: u32,
}

/// A structured NFL box score.
///
/// Every player line is attributed to exactly one side by exact
/// display-name match against the summary payload's header team names;
/// entries whose team cannot be matched are dropped, never misattributed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Boxscore {
    /// Passing lines per side, provider order.
    pub passing: TeamSplit<Vec<PassingLine>>,
    /// Rushing lines per side, provider order.
    pub rushing: TeamSplit<Vec<RushingLine>>,
    /// Receiving lines per side, provider order.
    pub receiving: TeamSplit<Vec<ReceivingLine>>,
    /// Team-level aggregate stats per side.
    pub team_stats: TeamSplit<TeamStatLine>,
}
