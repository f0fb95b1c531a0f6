//! League-official API connectors for the varsity data engine.
//!
//! These are the reverse-engineered endpoints the leagues' own sites run
//! on. They sit behind the ESPN sources in the default chains: slightly
//! different field vocabulary, same canonical output.

mod mlb;
mod nhl;

pub use mlb::MlbStatsApi;
pub use nhl::NhlWeb;

pub(crate) const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(15);
