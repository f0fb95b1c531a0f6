//! Varsity normalizes sports data across multiple upstream providers.
//!
//! Overview
//! - Routes each `(sport, category)` request down an ordered chain of
//!   sources implementing the `varsity_core` contracts.
//! - The first source returning a usable result wins; its output is
//!   returned untouched. Later sources are never consulted, and a fast
//!   low-priority source can never pre-empt a slow high-priority one.
//! - Every failure mode — network, non-2xx, malformed schema, empty
//!   payload, timeout — is caught per source, logged, and advances the
//!   chain. Exhaustion yields [`Resolved::Unavailable`], never an error.
//! - Completed games are enriched in place with highlights and (NFL) box
//!   scores from per-game summary calls.
//!
//! Building an engine over the bundled sources:
//! ```rust,ignore
//! use std::sync::Arc;
//! use varsity::{Sport, Varsity};
//!
//! let engine = Varsity::builder()
//!     .with_source(Arc::new(varsity_espn::EspnCdn::new()))
//!     .with_source(Arc::new(varsity_espn::EspnSiteApi::new()))
//!     .with_source(Arc::new(varsity_league::MlbStatsApi::new()))
//!     .with_source(Arc::new(varsity_cbs::CbsWeb::new()))
//!     .build()?;
//!
//! match engine.standings(Sport::Mlb).await {
//!     varsity::Resolved::Data { source, data } => render(source, data),
//!     varsity::Resolved::Unavailable => render_unavailable(),
//! }
//!
//! let games = engine.recent_games(Sport::Nfl).await;
//! ```

mod core;
mod router;

pub use crate::core::{Varsity, VarsityBuilder};
pub use varsity_core::{
    ScoreboardProvider, SportsSource, StandingsProvider, SummaryProvider, VarsityError,
};
pub use varsity_types::*;
