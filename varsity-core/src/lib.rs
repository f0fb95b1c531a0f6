//! varsity-core
//!
//! Traits and utilities shared across the varsity ecosystem.
//!
//! - `source`: the `SportsSource` trait and capability provider traits.
//! - `error`: the unified `VarsityError` taxonomy.
//! - `reconcile`: team identity reconciliation.
//! - `shape`: shape-tolerant probing over `serde_json::Value`.
//! - `classify`: league/conference bucket classification strategies.
//! - `htmltab`: HTML standings-table extraction for scraping sources.
//! - `net`: shared HTTP client plumbing (browser user-agent, JSON GETs).
//!
//! Async runtime (Tokio)
//! ---------------------
//! Source calls are plain `async fn`s; the orchestrator bounds them with
//! `tokio::time::timeout`, so anything driving a full chain must run under
//! a Tokio 1.x runtime.
#![warn(missing_docs)]

/// League/conference bucket classification strategies.
pub mod classify;
/// Unified error type.
pub mod error;
/// HTML standings-table extraction.
pub mod htmltab;
/// Shared HTTP plumbing for provider transports.
pub mod net;
/// Team identity reconciliation.
pub mod reconcile;
/// Shape-tolerant JSON probing helpers.
pub mod shape;
/// Source capability traits and the primary `SportsSource` interface.
pub mod source;

pub use error::VarsityError;
pub use source::{ScoreboardProvider, SportsSource, StandingsProvider, SummaryProvider};
pub use varsity_types::*;
