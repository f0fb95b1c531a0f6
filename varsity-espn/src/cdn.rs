use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
use url::Url;

use varsity_core::classify::GroupClassifier;
use varsity_core::{StandingsProvider, SportsSource, VarsityError, net, shape};
use varsity_types::{Sport, Standings};

use crate::standings::{collect_entries, finish, leaf_groups};

/// Standings source backed by the `cdn.espn.com/core/{league}/standings?xhr=1`
/// endpoint. Covers NFL, NBA, and MLB.
pub struct EspnCdn {
    base: Url,
    client: reqwest::Client,
}

impl EspnCdn {
    /// Source against the production endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base(Url::parse("https://cdn.espn.com/").expect("static url"))
    }

    /// Source against an alternate base URL (tests point this at a local
    /// mock server).
    #[must_use]
    pub fn with_base(base: Url) -> Self {
        Self {
            base,
            client: net::client(crate::DEFAULT_TIMEOUT),
        }
    }

    fn parse(sport: Sport, payload: &Value) -> Result<Standings, VarsityError> {
        let content = payload
            .get("content")
            .ok_or_else(|| VarsityError::schema("cdn standings payload missing `content`"))?;
        let block = content
            .get("standings")
            .ok_or_else(|| VarsityError::schema("cdn standings payload missing `content.standings`"))?;

        let classifier = GroupClassifier::for_sport(sport);
        let mut standings = Standings::new(sport);
        for group in leaf_groups(block) {
            let label = classifier.by_name_or_fallback(shape::str_of(group, "name"));
            let Some(entries_block) = group.get("standings") else {
                debug!(sport = %sport, "cdn group without standings block");
                continue;
            };
            collect_entries(sport, label, shape::entries_of(entries_block), &mut standings);
        }
        finish("espn-cdn", standings)
    }
}

impl Default for EspnCdn {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StandingsProvider for EspnCdn {
    async fn standings(&self, sport: Sport) -> Result<Standings, VarsityError> {
        let mut url = self
            .base
            .join(&format!("core/{}/standings", sport.as_str()))
            .map_err(|e| VarsityError::InvalidArg(e.to_string()))?;
        url.set_query(Some("xhr=1"));
        let payload = net::get_json(&self.client, &url, None).await?;
        Self::parse(sport, &payload)
    }
}

impl SportsSource for EspnCdn {
    fn name(&self) -> &'static str {
        "espn-cdn"
    }

    fn vendor(&self) -> &'static str {
        "ESPN"
    }

    fn supports_sport(&self, sport: Sport) -> bool {
        matches!(sport, Sport::Nfl | Sport::Nba | Sport::Mlb)
    }

    fn as_standings_provider(&self) -> Option<&dyn StandingsProvider> {
        Some(self)
    }
}
