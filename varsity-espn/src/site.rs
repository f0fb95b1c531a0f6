use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use tracing::warn;
use url::Url;

use varsity_core::classify::GroupClassifier;
use varsity_core::{
    ScoreboardProvider, SportsSource, StandingsProvider, SummaryProvider, VarsityError, net,
    reconcile, shape,
};
use varsity_types::{Boxscore, Game, GameState, Highlight, Sport, Standings};

use crate::wire::{EventWire, ScoreboardResponse};
use crate::{site_path, standings, summary};

/// Source backed by the `site.api.espn.com` JSON API: standings (MLB
/// alternate, NHL primary), per-date scoreboards, and per-game summaries.
pub struct EspnSiteApi {
    base: Url,
    client: reqwest::Client,
}

impl EspnSiteApi {
    /// Source against the production endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base(Url::parse("https://site.api.espn.com/").expect("static url"))
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

    fn endpoint(&self, sport: Sport, tail: &str) -> Result<Url, VarsityError> {
        self.base
            .join(&format!("apis/site/v2/sports/{}/{tail}", site_path(sport)))
            .map_err(|e| VarsityError::InvalidArg(e.to_string()))
    }

    fn referer(sport: Sport) -> String {
        format!("https://www.espn.com/{}/standings", sport.as_str())
    }

    fn parse_standings(sport: Sport, payload: &Value) -> Result<Standings, VarsityError> {
        let groups = shape::array_of(payload, "groups");
        if groups.is_empty() {
            return Err(VarsityError::schema("site standings payload missing `groups`"));
        }
        let classifier = GroupClassifier::for_sport(sport);
        let mut out = Standings::new(sport);
        for group in groups {
            let label = classifier.by_name_or_fallback(shape::str_of(group, "name"));
            let Some(entries_block) = group.get("standings") else {
                continue;
            };
            standings::collect_entries(sport, label, shape::entries_of(entries_block), &mut out);
        }
        standings::finish("espn-site", out)
    }

    fn parse_event(sport: Sport, event: EventWire) -> Option<Game> {
        let state = match event.state() {
            "post" => GameState::Final,
            "in" => GameState::InProgress,
            _ => GameState::Scheduled,
        };
        let competition = event.competitions.first()?;
        if competition.competitors.len() < 2 {
            return None;
        }
        let name_of = |i: usize| {
            let team = competition.competitors[i].team.as_ref();
            reconcile::display_name(
                team.map_or("", |t| t.name.as_str()),
                team.map_or("", |t| t.location.as_str()),
            )
        };
        let score_of = |i: usize| {
            competition.competitors[i]
                .score
                .as_ref()
                .map_or(0.0, shape::num) as u32
        };
        let mut game = Game {
            id: event.id,
            date: event.date,
            sport,
            team1: name_of(0),
            team2: name_of(1),
            score1: score_of(0),
            score2: score_of(1),
            winner: None,
            state,
            highlights: Vec::new(),
            boxscore: None,
        };
        game.winner = game.derived_winner();
        Some(game)
    }
}

impl Default for EspnSiteApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StandingsProvider for EspnSiteApi {
    async fn standings(&self, sport: Sport) -> Result<Standings, VarsityError> {
        let url = self.endpoint(sport, "standings")?;
        let payload = net::get_json(&self.client, &url, Some(&Self::referer(sport))).await?;
        Self::parse_standings(sport, &payload)
    }
}

#[async_trait]
impl ScoreboardProvider for EspnSiteApi {
    async fn scoreboard(&self, sport: Sport, date: NaiveDate) -> Result<Vec<Game>, VarsityError> {
        let mut url = self.endpoint(sport, "scoreboard")?;
        url.set_query(Some(&format!("dates={}", date.format("%Y%m%d"))));
        let payload = net::get_json(&self.client, &url, None).await?;
        if payload.get("events").is_none() {
            return Err(VarsityError::schema("scoreboard payload missing `events`"));
        }
        let response: ScoreboardResponse = serde_json::from_value(payload)
            .map_err(|e| VarsityError::schema(format!("scoreboard payload: {e}")))?;
        let games = response
            .events
            .into_iter()
            .filter_map(|event| {
                let parsed = Self::parse_event(sport, event);
                if parsed.is_none() {
                    warn!(sport = %sport, "skipping scoreboard event without two competitors");
                }
                parsed
            })
            .collect();
        Ok(games)
    }
}

#[async_trait]
impl SummaryProvider for EspnSiteApi {
    async fn highlights(
        &self,
        sport: Sport,
        event_id: &str,
    ) -> Result<Vec<Highlight>, VarsityError> {
        let mut url = self.endpoint(sport, "summary")?;
        url.set_query(Some(&format!("event={event_id}")));
        let payload = net::get_json(&self.client, &url, None).await?;
        Ok(summary::extract_highlights(sport, &payload))
    }

    async fn boxscore(&self, sport: Sport, event_id: &str) -> Result<Boxscore, VarsityError> {
        if sport != Sport::Nfl {
            return Err(VarsityError::unsupported("summary/boxscore"));
        }
        let mut url = self.endpoint(sport, "summary")?;
        url.set_query(Some(&format!("event={event_id}")));
        let payload = net::get_json(&self.client, &url, None).await?;
        summary::extract_boxscore(&payload)
    }
}

impl SportsSource for EspnSiteApi {
    fn name(&self) -> &'static str {
        "espn-site"
    }

    fn vendor(&self) -> &'static str {
        "ESPN"
    }

    fn supports_sport(&self, _sport: Sport) -> bool {
        true
    }

    fn as_standings_provider(&self) -> Option<&dyn StandingsProvider> {
        Some(self)
    }

    fn as_scoreboard_provider(&self) -> Option<&dyn ScoreboardProvider> {
        Some(self)
    }

    fn as_summary_provider(&self) -> Option<&dyn SummaryProvider> {
        Some(self)
    }
}
