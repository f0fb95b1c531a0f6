//! CBS Sports standings-page scraper for the varsity data engine.
//!
//! CBS renders standings as plain `tableType-1` tables, which makes it a
//! serviceable last line of defense when the JSON APIs are down. MLB and
//! NHL only — the layouts for the other sports split records across
//! several tables and aren't worth chasing.

use async_trait::async_trait;
use tracing::warn;
use url::Url;

use varsity_core::classify::GroupClassifier;
use varsity_core::htmltab::extract_tables;
use varsity_core::{StandingsProvider, SportsSource, VarsityError, net, shape};
use varsity_types::{Sport, Standings, TeamRecord};

const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(15);

/// Standings source scraping `cbssports.com`.
pub struct CbsWeb {
    base: Url,
    client: reqwest::Client,
}

impl CbsWeb {
    /// Source against the production site.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base(Url::parse("https://www.cbssports.com/").expect("static url"))
    }

    /// Source against an alternate base URL (tests point this at a local
    /// mock server).
    #[must_use]
    pub fn with_base(base: Url) -> Self {
        Self {
            base,
            client: net::client(DEFAULT_TIMEOUT),
        }
    }

    fn parse(sport: Sport, html: &str) -> Result<Standings, VarsityError> {
        let classifier = GroupClassifier::for_sport(sport);
        let mut standings = Standings::new(sport);
        // NHL rows carry two extra columns (OTL, PTS).
        let min_cells = if sport == Sport::Nhl { 6 } else { 4 };

        for table in extract_tables(html, "table.tableType-1") {
            let label = classifier.classify(&table.body, &table.body);
            for cells in &table.rows {
                if cells.len() < min_cells {
                    continue;
                }
                let name = cells[1].trim();
                if name.is_empty() {
                    continue;
                }
                let Ok(wins) = cells[2].trim().parse::<u32>() else {
                    warn!(sport = %sport, team = name, "skipping row with bad win count");
                    continue;
                };
                let Ok(losses) = cells[3].trim().parse::<u32>() else {
                    warn!(sport = %sport, team = name, "skipping row with bad loss count");
                    continue;
                };
                let team = match sport {
                    Sport::Nhl => {
                        let overtime_losses: u32 = shape::parse_or_zero(&cells[4]);
                        let points: u32 = shape::parse_or_zero(&cells[5]);
                        TeamRecord {
                            display_name: name.to_string(),
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
                        }
                    }
                    _ => TeamRecord {
                        display_name: name.to_string(),
                        wins,
                        losses,
                        ties: None,
                        overtime_losses: None,
                        points: None,
                        win_percentage: TeamRecord::derived_win_percentage(wins, losses, 0),
                        games_back: cells
                            .get(4)
                            .map_or(0.0, |gb| shape::parse_or_zero(gb.trim())),
                        group: label.to_string(),
                    },
                };
                standings.push(label, team);
            }
        }
        standings.sort_by_ranking();
        if standings.is_empty() {
            Err(VarsityError::empty("cbs-web"))
        } else {
            Ok(standings)
        }
    }
}

impl Default for CbsWeb {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StandingsProvider for CbsWeb {
    async fn standings(&self, sport: Sport) -> Result<Standings, VarsityError> {
        let url = self
            .base
            .join(&format!("{}/standings/", sport.as_str()))
            .map_err(|e| VarsityError::InvalidArg(e.to_string()))?;
        let html = net::get_text(&self.client, &url).await?;
        Self::parse(sport, &html)
    }
}

impl SportsSource for CbsWeb {
    fn name(&self) -> &'static str {
        "cbs-web"
    }

    fn vendor(&self) -> &'static str {
        "CBS Sports"
    }

    fn supports_sport(&self, sport: Sport) -> bool {
        matches!(sport, Sport::Mlb | Sport::Nhl)
    }

    fn as_standings_provider(&self) -> Option<&dyn StandingsProvider> {
        Some(self)
    }
}
