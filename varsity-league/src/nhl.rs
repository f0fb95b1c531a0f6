use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use varsity_core::classify::GroupClassifier;
use varsity_core::{StandingsProvider, SportsSource, VarsityError, net, reconcile, shape};
use varsity_types::{Sport, Standings, TeamRecord};

/// Standings source backed by `api-web.nhle.com`, the NHL's own site API.
pub struct NhlWeb {
    base: Url,
    client: reqwest::Client,
}

impl NhlWeb {
    /// Source against the production endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base(Url::parse("https://api-web.nhle.com/").expect("static url"))
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

    fn parse(payload: &Value) -> Result<Standings, VarsityError> {
        let rows = shape::array_of(payload, "standings");
        if rows.is_empty() {
            return Err(VarsityError::schema("nhle payload missing `standings`"));
        }
        let classifier = GroupClassifier::for_sport(Sport::Nhl);
        let mut standings = Standings::new(Sport::Nhl);
        for row in rows {
            // teamName.default is already the full display name.
            let name = shape::str_of(row.get("teamName").unwrap_or(&Value::Null), "default");
            let display_name = reconcile::display_name(name, "");
            let wins = shape::count_of(row, "wins");
            let losses = shape::count_of(row, "losses");
            let overtime_losses = shape::count_of(row, "otLosses");
            let points = shape::count_of(row, "points");
            let label = classifier.by_name_or_fallback(shape::str_of(row, "conferenceName"));
            standings.push(
                label,
                TeamRecord {
                    display_name,
                    wins,
                    losses,
                    ties: None,
                    overtime_losses: Some(overtime_losses),
                    points: Some(points),
                    win_percentage: TeamRecord::derived_win_percentage(
                        wins,
                        losses,
                        overtime_losses,
                    ),
                    games_back: 0.0,
                    group: label.to_string(),
                },
            );
        }
        standings.sort_by_ranking();
        if standings.is_empty() {
            Err(VarsityError::empty("nhl-web"))
        } else {
            Ok(standings)
        }
    }
}

impl Default for NhlWeb {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StandingsProvider for NhlWeb {
    async fn standings(&self, sport: Sport) -> Result<Standings, VarsityError> {
        if sport != Sport::Nhl {
            return Err(VarsityError::unsupported("standings"));
        }
        let url = self
            .base
            .join("v1/standings/now")
            .map_err(|e| VarsityError::InvalidArg(e.to_string()))?;
        let payload = net::get_json(&self.client, &url, None).await?;
        Self::parse(&payload)
    }
}

impl SportsSource for NhlWeb {
    fn name(&self) -> &'static str {
        "nhl-web"
    }

    fn vendor(&self) -> &'static str {
        "NHL"
    }

    fn supports_sport(&self, sport: Sport) -> bool {
        sport == Sport::Nhl
    }

    fn as_standings_provider(&self) -> Option<&dyn StandingsProvider> {
        Some(self)
    }
}
