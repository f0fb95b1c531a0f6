use tracing::{info, warn};

use crate::Varsity;
use crate::core::{next_request_id, tag_err};
use varsity_types::{Category, Resolved, Sport, Standings};

impl Varsity {
    /// Resolve league standings for a sport.
    ///
    /// Walks the configured chain strictly in priority order, one source at
    /// a time: priority order dominates arrival order by construction. A
    /// source wins by returning at least one non-empty group; its snapshot
    /// is returned untouched. Chain exhaustion yields
    /// [`Resolved::Unavailable`] — never an error.
    #[tracing::instrument(
        name = "varsity::standings",
        skip(self),
        fields(sport = %sport, request_id = next_request_id()),
    )]
    pub async fn standings(&self, sport: Sport) -> Resolved<Standings> {
        for source in self.chain_for(sport, Category::Standings) {
            if !source.supports_sport(sport) {
                continue;
            }
            let Some(provider) = source.as_standings_provider() else {
                continue;
            };
            match Self::source_call_with_timeout(
                source.name(),
                "standings",
                self.cfg.source_timeout,
                provider.standings(sport),
            )
            .await
            {
                Ok(snapshot) if !snapshot.is_empty() => {
                    info!(
                        source = source.name(),
                        teams = snapshot.team_count(),
                        "standings resolved"
                    );
                    return Resolved::Data {
                        source: source.key(),
                        data: snapshot,
                    };
                }
                Ok(_) => {
                    warn!(source = source.name(), "empty standings, advancing chain");
                }
                Err(e) => {
                    let e = tag_err(source.name(), e);
                    warn!(source = source.name(), error = %e, "standings source failed, advancing chain");
                }
            }
        }
        warn!("standings chain exhausted");
        Resolved::Unavailable
    }
}
