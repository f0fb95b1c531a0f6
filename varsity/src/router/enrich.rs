use tracing::{debug, warn};

use crate::Varsity;
use crate::core::tag_err;
use varsity_types::{Category, Game, GameState, Sport};

/// At most this many highlight entries survive per game, in provider order.
const MAX_HIGHLIGHTS: usize = 5;

impl Varsity {
    /// Enrich a batch of games concurrently, preserving order.
    pub(crate) async fn enrich_games(&self, sport: Sport, games: Vec<Game>) -> Vec<Game> {
        futures::future::join_all(games.into_iter().map(|g| self.enrich(sport, g))).await
    }

    /// Attach highlights and (NFL) a box score to a completed game.
    ///
    /// Mutates only the enrichment fields. Enrichment is attempted only for
    /// final games with a non-empty id; any failure leaves the fields as
    /// they were and is never fatal to the game itself.
    #[tracing::instrument(
        name = "varsity::enrich",
        skip(self, game),
        fields(sport = %sport, game_id = %game.id),
    )]
    pub(crate) async fn enrich(&self, sport: Sport, mut game: Game) -> Game {
        if game.state != GameState::Final || game.id.is_empty() {
            return game;
        }

        for source in self.chain_for(sport, Category::RecentGames) {
            if !source.supports_sport(sport) {
                continue;
            }
            let Some(provider) = source.as_summary_provider() else {
                continue;
            };
            match Self::source_call_with_timeout(
                source.name(),
                "summary/highlights",
                self.cfg.source_timeout,
                provider.highlights(sport, &game.id),
            )
            .await
            {
                Ok(mut highlights) => {
                    highlights.truncate(MAX_HIGHLIGHTS);
                    debug!(
                        source = source.name(),
                        count = highlights.len(),
                        "highlights attached"
                    );
                    game.highlights = highlights;
                }
                Err(e) => {
                    let e = tag_err(source.name(), e);
                    warn!(source = source.name(), error = %e, "highlights failed, advancing chain");
                    continue;
                }
            }

            // The source answered for this game; a box-score failure
            // degrades the game, it does not advance the chain.
            if sport == Sport::Nfl {
                match Self::source_call_with_timeout(
                    source.name(),
                    "summary/boxscore",
                    self.cfg.source_timeout,
                    provider.boxscore(sport, &game.id),
                )
                .await
                {
                    Ok(boxscore) => game.boxscore = Some(boxscore),
                    Err(e) => {
                        let e = tag_err(source.name(), e);
                        warn!(source = source.name(), error = %e, "boxscore enrichment failed");
                    }
                }
            }
            break;
        }
        game
    }
}
