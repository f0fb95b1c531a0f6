//! Configuration for the orchestrator: fallback chains and call bounds.

use std::collections::HashMap;
use std::time::Duration;

use crate::source::keys;
use crate::{Category, SourceKey, Sport};

/// Ordered fallback chains per `(sport, category)`.
///
/// Chains are data, not branching code: the resolver walks whatever list is
/// configured here, in order, and stops at the first source that yields a
/// usable result.
#[derive(Debug, Clone)]
pub struct ChainTable {
    chains: HashMap<(Sport, Category), Vec<SourceKey>>,
}

impl ChainTable {
    /// An empty table. Resolution falls back to source registration order.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            chains: HashMap::new(),
        }
    }

    /// The built-in chains, reproducing the battle-tested provider orders.
    #[must_use]
    pub fn defaults() -> Self {
        let mut table = Self::empty();
        table.set(Sport::Nba, Category::Standings, vec![keys::ESPN_CDN]);
        table.set(Sport::Nfl, Category::Standings, vec![keys::ESPN_CDN]);
        table.set(
            Sport::Mlb,
            Category::Standings,
            vec![
                keys::ESPN_CDN,
                keys::ESPN_SITE,
                keys::MLB_STATSAPI,
                keys::CBS_WEB,
                keys::ESPN_WEB,
            ],
        );
        table.set(
            Sport::Nhl,
            Category::Standings,
            vec![keys::ESPN_SITE, keys::NHL_WEB, keys::CBS_WEB],
        );
        for sport in Sport::ALL {
            table.set(sport, Category::RecentGames, vec![keys::ESPN_SITE]);
        }
        table
    }

    /// Replace the chain for one `(sport, category)` pair.
    pub fn set(&mut self, sport: Sport, category: Category, chain: Vec<SourceKey>) {
        self.chains.insert((sport, category), chain);
    }

    /// The configured chain, if any.
    #[must_use]
    pub fn chain(&self, sport: Sport, category: Category) -> Option<&[SourceKey]> {
        self.chains.get(&(sport, category)).map(Vec::as_slice)
    }

    /// Iterate over all configured chains (mutably), for build-time
    /// validation against the registered sources.
    pub fn chains_mut(&mut self) -> impl Iterator<Item = &mut Vec<SourceKey>> {
        self.chains.values_mut()
    }
}

impl Default for ChainTable {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Global configuration for the orchestrator.
#[derive(Debug, Clone)]
pub struct VarsityConfig {
    /// Fallback chains per sport and category.
    pub chains: ChainTable,
    /// Timeout applied to each individual source call. One attempt, no
    /// retries; this is the only bound on blocking duration.
    pub source_timeout: Duration,
    /// Default lookback window for recent-games queries, in days.
    pub lookback_days: u32,
}

impl Default for VarsityConfig {
    fn default() -> Self {
        Self {
            chains: ChainTable::defaults(),
            source_timeout: Duration::from_secs(15),
            lookback_days: 7,
        }
    }
}
