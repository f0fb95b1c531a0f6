use async_trait::async_trait;
use tracing::warn;
use url::Url;

use varsity_core::classify::GroupClassifier;
use varsity_core::htmltab::{STANDINGS_HEADER_KEYWORDS, extract_tables, is_standings_table};
use varsity_core::{StandingsProvider, SportsSource, VarsityError, net, shape};
use varsity_types::{Sport, Standings, TeamRecord};

use crate::standings::finish;

/// Last-resort standings source scraping the `espn.com` standings page.
///
/// ESPN's markup shifts without notice, so nothing here assumes a fixed
/// table class: candidate tables are found by header keywords and bucketed
/// by surrounding context or team-name majority.
pub struct EspnWeb {
    base: Url,
    client: reqwest::Client,
}

impl EspnWeb {
    /// Source against the production site.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base(Url::parse("https://www.espn.com/").expect("static url"))
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

    fn parse(sport: Sport, html: &str) -> Result<Standings, VarsityError> {
        let classifier = GroupClassifier::for_sport(sport);
        let mut standings = Standings::new(sport);

        for table in extract_tables(html, "table") {
            if !is_standings_table(&table.headers, STANDINGS_HEADER_KEYWORDS) {
                continue;
            }
            let label = classifier.classify(&table.context, &table.body);
            for cells in &table.rows {
                if cells.len() < 4 {
                    continue;
                }
                let name = cells[1].trim();
                if name.is_empty() {
                    continue;
                }
                // Columns: rank, team, W, L[, GB]. W/L must be real
                // integers; a bad cell disqualifies the row, not the table.
                let Ok(wins) = cells[2].trim().parse::<u32>() else {
                    warn!(sport = %sport, team = name, "skipping scraped row with bad win count");
                    continue;
                };
                let Ok(losses) = cells[3].trim().parse::<u32>() else {
                    warn!(sport = %sport, team = name, "skipping scraped row with bad loss count");
                    continue;
                };
                let games_back: f64 = cells
                    .get(4)
                    .map_or(0.0, |gb| shape::parse_or_zero(gb.trim()));
                standings.push(
                    label,
                    TeamRecord {
                        display_name: name.to_string(),
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
        finish("espn-web", standings)
    }
}

impl Default for EspnWeb {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StandingsProvider for EspnWeb {
    async fn standings(&self, sport: Sport) -> Result<Standings, VarsityError> {
        let url = self
            .base
            .join(&format!("{}/standings", sport.as_str()))
            .map_err(|e| VarsityError::InvalidArg(e.to_string()))?;
        let html = net::get_text(&self.client, &url).await?;
        Self::parse(sport, &html)
    }
}

impl SportsSource for EspnWeb {
    fn name(&self) -> &'static str {
        "espn-web"
    }

    fn vendor(&self) -> &'static str {
        "ESPN"
    }

    fn supports_sport(&self, sport: Sport) -> bool {
        sport == Sport::Mlb
    }

    fn as_standings_provider(&self) -> Option<&dyn StandingsProvider> {
        Some(self)
    }
}
