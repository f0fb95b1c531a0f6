//! ESPN connectors for the varsity data engine.
//!
//! Three independent sources, registered under separate chain keys because
//! they fail independently:
//!
//! - [`EspnCdn`] — the `cdn.espn.com` xhr standings endpoint (NFL, NBA,
//!   MLB). Its `content.standings` block is shape-unstable and is parsed
//!   through explicit probing.
//! - [`EspnSiteApi`] — the `site.api.espn.com` JSON API: standings, per-date
//!   scoreboards, and per-game summaries (highlights plus the NFL box
//!   score).
//! - [`EspnWeb`] — last-resort scraper for the `espn.com` standings page.

mod cdn;
mod scrape;
mod site;
mod standings;
mod summary;
mod wire;

pub use cdn::EspnCdn;
pub use scrape::EspnWeb;
pub use site::EspnSiteApi;

use std::time::Duration;

use varsity_types::Sport;

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// ESPN's `{discipline}/{league}` path segment for a sport.
pub(crate) const fn site_path(sport: Sport) -> &'static str {
    match sport {
        Sport::Nba => "basketball/nba",
        Sport::Nfl => "football/nfl",
        Sport::Mlb => "baseball/mlb",
        Sport::Nhl => "hockey/nhl",
    }
}
