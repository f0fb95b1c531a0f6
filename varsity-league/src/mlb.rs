use async_trait::async_trait;
use chrono::{Datelike, Utc};
use serde_json::Value;
use tracing::warn;
use url::Url;

use varsity_core::{StandingsProvider, SportsSource, VarsityError, net, reconcile, shape};
use varsity_types::{Sport, Standings, TeamRecord};

/// American League id in the statsapi vocabulary.
const LEAGUE_AL: f64 = 103.0;
/// National League id.
const LEAGUE_NL: f64 = 104.0;

/// Standings source backed by `statsapi.mlb.com`, MLB's own stats API.
pub struct MlbStatsApi {
    base: Url,
    client: reqwest::Client,
}

impl MlbStatsApi {
    /// Source against the production endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base(Url::parse("https://statsapi.mlb.com/").expect("static url"))
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

    fn bucket(record: &Value) -> Option<&'static str> {
        let league = record.get("league").unwrap_or(&Value::Null);
        let id = shape::num_of(league, "id");
        let name = shape::str_of(league, "name").to_lowercase();
        if id == LEAGUE_AL || name.contains("american") {
            Some("AL")
        } else if id == LEAGUE_NL || name.contains("national") {
            Some("NL")
        } else {
            None
        }
    }

    fn parse(payload: &Value) -> Result<Standings, VarsityError> {
        let records = shape::array_of(payload, "records");
        if records.is_empty() {
            return Err(VarsityError::schema("statsapi payload missing `records`"));
        }
        let mut standings = Standings::new(Sport::Mlb);
        for record in records {
            let Some(label) = Self::bucket(record) else {
                warn!("statsapi record without a recognizable league");
                continue;
            };
            for team_record in shape::array_of(record, "teamRecords") {
                let team = team_record.get("team").unwrap_or(&Value::Null);
                let display_name = reconcile::display_name(
                    shape::str_of(team, "name"),
                    shape::str_of(team, "locationName"),
                );
                let league_record = team_record.get("leagueRecord").unwrap_or(&Value::Null);
                let wins = shape::count_of(league_record, "wins");
                let losses = shape::count_of(league_record, "losses");
                // leagueGamesBack is "-" for the division leader.
                let games_back = shape::num_of(team_record, "leagueGamesBack");
                standings.push(
                    label,
                    TeamRecord {
                        display_name,
                        wins,
                        losses,
                        ties: None,
                        overtime_losses: None,
                        points: None,
                        win_percentage: TeamRecord::derived_win_percentage(wins, losses, 0),
                        games_back,
                        group: label.to_string(),
                    },
                );
            }
        }
        standings.sort_by_ranking();
        if standings.is_empty() {
            Err(VarsityError::empty("mlb-statsapi"))
        } else {
            Ok(standings)
        }
    }
}

impl Default for MlbStatsApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StandingsProvider for MlbStatsApi {
    async fn standings(&self, sport: Sport) -> Result<Standings, VarsityError> {
        if sport != Sport::Mlb {
            return Err(VarsityError::unsupported("standings"));
        }
        let season = Utc::now().year();
        let mut url = self
            .base
            .join("api/v1/standings")
            .map_err(|e| VarsityError::InvalidArg(e.to_string()))?;
        url.set_query(Some(&format!(
            "leagueId=103,104&season={season}&standingsTypes=regularSeason"
        )));
        let payload = net::get_json(&self.client, &url, None).await?;
        Self::parse(&payload)
    }
}

impl SportsSource for MlbStatsApi {
    fn name(&self) -> &'static str {
        "mlb-statsapi"
    }

    fn vendor(&self) -> &'static str {
        "MLB Advanced Media"
    }

    fn supports_sport(&self, sport: Sport) -> bool {
        sport == Sport::Mlb
    }

    fn as_standings_provider(&self) -> Option<&dyn StandingsProvider> {
        Some(self)
    }
}
