//! Serde shapes for the stable parts of ESPN's site API payloads.
//!
//! Only the scoreboard is rigid enough to deserialize directly; standings
//! and summaries go through shape probing instead. Every field is optional
//! or defaulted — ESPN omits freely.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ScoreboardResponse {
    #[serde(default)]
    pub events: Vec<EventWire>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct EventWire {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub date: String,
    pub status: Option<StatusWire>,
    #[serde(default)]
    pub competitions: Vec<CompetitionWire>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusWire {
    #[serde(rename = "type")]
    pub kind: Option<StatusTypeWire>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusTypeWire {
    #[serde(default)]
    pub state: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CompetitionWire {
    #[serde(default)]
    pub competitors: Vec<CompetitorWire>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CompetitorWire {
    pub team: Option<TeamWire>,
    /// ESPN sends scores as strings; tolerate numbers too.
    pub score: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct TeamWire {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
}

impl EventWire {
    pub(crate) fn state(&self) -> &str {
        self.status
            .as_ref()
            .and_then(|s| s.kind.as_ref())
            .map_or("", |k| k.state.as_str())
    }
}
