use chrono::{Days, NaiveDate, Utc};
use tracing::{info, warn};

use crate::Varsity;
use crate::core::{next_request_id, tag_err};
use varsity_types::{Category, Game, GameState, Resolved, SourceKey, Sport};

impl Varsity {
    /// Recently completed games over the configured lookback window.
    pub async fn recent_games(&self, sport: Sport) -> Resolved<Vec<Game>> {
        self.recent_games_within(sport, self.cfg.lookback_days).await
    }

    /// Recently completed games, walking calendar days from yesterday back
    /// through `days_back`.
    ///
    /// Day scoreboards are fetched concurrently, but each day's chain is
    /// still walked in priority order. A day with a well-formed, empty
    /// scoreboard is a valid answer; a day where every source fails
    /// contributes nothing. Only when *every* day fails is the whole
    /// request [`Resolved::Unavailable`] — a quiet week is
    /// `Data` with an empty list.
    #[tracing::instrument(
        name = "varsity::recent_games",
        skip(self),
        fields(sport = %sport, days_back, request_id = next_request_id()),
    )]
    pub async fn recent_games_within(&self, sport: Sport, days_back: u32) -> Resolved<Vec<Game>> {
        let today = Utc::now().date_naive();
        let days: Vec<NaiveDate> = (1..=u64::from(days_back.max(1)))
            .filter_map(|ago| today.checked_sub_days(Days::new(ago)))
            .collect();

        let per_day =
            futures::future::join_all(days.iter().map(|d| self.scoreboard_for(sport, *d))).await;

        let mut winner: Option<SourceKey> = None;
        let mut games: Vec<Game> = Vec::new();
        for outcome in per_day {
            let Some((source, day_games)) = outcome else {
                continue;
            };
            winner.get_or_insert(source);
            games.extend(day_games.into_iter().filter(|g| g.state == GameState::Final));
        }
        let Some(winner) = winner else {
            warn!("every day's scoreboard chain failed");
            return Resolved::Unavailable;
        };

        let mut games = self.enrich_games(sport, games).await;
        // ISO-8601 strings sort chronologically; most recent first.
        games.sort_by(|a, b| b.date.cmp(&a.date));
        info!(source = %winner, games = games.len(), "recent games resolved");
        Resolved::Data {
            source: winner,
            data: games,
        }
    }

    /// One day's scoreboard through the chain. `None` means every source
    /// failed for this day.
    async fn scoreboard_for(&self, sport: Sport, date: NaiveDate) -> Option<(SourceKey, Vec<Game>)> {
        for source in self.chain_for(sport, Category::RecentGames) {
            if !source.supports_sport(sport) {
                continue;
            }
            let Some(provider) = source.as_scoreboard_provider() else {
                continue;
            };
            match Self::source_call_with_timeout(
                source.name(),
                "scoreboard",
                self.cfg.source_timeout,
                provider.scoreboard(sport, date),
            )
            .await
            {
                // An empty day is a real answer, not a chain-advancing failure.
                Ok(games) => return Some((source.key(), games)),
                Err(e) => {
                    let e = tag_err(source.name(), e);
                    warn!(source = source.name(), %date, error = %e, "scoreboard source failed, advancing chain");
                }
            }
        }
        None
    }
}
