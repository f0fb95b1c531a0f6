//! Canonical data model and configuration primitives for the varsity engine.
//!
//! Everything here is a plain value object: adapters construct these types,
//! the orchestrator hands them to the caller, and nothing holds a reference
//! back to the source that produced it.
#![warn(missing_docs)]

mod boxscore;
mod config;
mod game;
mod resolved;
mod source;
mod sport;
mod standings;

pub use boxscore::{Boxscore, PassingLine, ReceivingLine, RushingLine, TeamSide, TeamSplit, TeamStatLine};
pub use config::{ChainTable, VarsityConfig};
pub use game::{Game, GameState, Highlight};
pub use resolved::Resolved;
pub use source::{SourceKey, keys};
pub use sport::{Category, Sport};
pub use standings::{Standings, StandingsGroup, TeamRecord};
