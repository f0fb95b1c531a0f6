//! Shared parsing for ESPN JSON standings entries.
//!
//! Both the cdn and site.api endpoints converge on the same entry shape —
//! `{team: {name, location}, stats: [{name, value}]}` — but wrap it in
//! different and occasionally shifting containers.

use serde_json::Value;
use tracing::warn;

use varsity_core::{VarsityError, reconcile, shape};
use varsity_types::{Sport, Standings, TeamRecord};

/// Walk a `standings` block down to the leaf groups that actually carry
/// entries. The block appears as either a list of season blocks each with
/// `groups`, or a dict with `groups`; NFL nests conference groups one level
/// deeper, so any group that itself carries `groups` is expanded.
pub(crate) fn leaf_groups(block: &Value) -> Vec<&Value> {
    let top: Vec<&Value> = match block {
        Value::Array(seasons) => seasons
            .iter()
            .flat_map(|season| shape::array_of(season, "groups"))
            .collect(),
        Value::Object(_) => shape::array_of(block, "groups").iter().collect(),
        _ => Vec::new(),
    };

    let mut out = Vec::new();
    for group in top {
        let nested = shape::array_of(group, "groups");
        if nested.is_empty() {
            out.push(group);
        } else {
            out.extend(nested.iter());
        }
    }
    out
}

/// Parse one standings entry into a [`TeamRecord`], or `None` when the
/// entry doesn't carry the expected team/stats pair.
pub(crate) fn parse_entry(sport: Sport, group_label: &str, entry: &Value) -> Option<TeamRecord> {
    let team = entry.get("team")?;
    let stats = entry.get("stats")?.as_array()?;

    let display_name =
        reconcile::display_name(shape::str_of(team, "name"), shape::str_of(team, "location"));

    let mut wins = 0u32;
    let mut losses = 0u32;
    let mut ties = 0u32;
    let mut overtime_losses = 0u32;
    let mut points = 0u32;
    let mut provider_pct: Option<f64> = None;
    let mut games_back = 0.0f64;

    for stat in stats {
        let value = stat.get("value").unwrap_or(&Value::Null);
        match shape::str_of(stat, "name") {
            "wins" => wins = shape::num(value) as u32,
            "losses" => losses = shape::num(value) as u32,
            "ties" => ties = shape::num(value) as u32,
            "overtimeLosses" => overtime_losses = shape::num(value) as u32,
            "points" => points = shape::num(value) as u32,
            "winPercent" => provider_pct = Some(shape::num(value)),
            "gamesBack" => games_back = shape::num(value),
            _ => {}
        }
    }

    let extra = match sport {
        Sport::Nfl => ties,
        Sport::Nhl => overtime_losses,
        _ => 0,
    };
    // Trust the provider percentage when present, else derive. A mismatch
    // between the two is not reconciled.
    let win_percentage =
        provider_pct.unwrap_or_else(|| TeamRecord::derived_win_percentage(wins, losses, extra));

    Some(TeamRecord {
        display_name,
        wins,
        losses,
        ties: (sport == Sport::Nfl).then_some(ties),
        overtime_losses: (sport == Sport::Nhl).then_some(overtime_losses),
        points: (sport == Sport::Nhl).then_some(points),
        win_percentage,
        games_back,
        group: group_label.to_string(),
    })
}

/// Push every parsable entry of a leaf group into the snapshot, skipping
/// malformed rows with a warning.
pub(crate) fn collect_entries(
    sport: Sport,
    label: &str,
    entries: &[Value],
    standings: &mut Standings,
) {
    for entry in entries {
        match parse_entry(sport, label, entry) {
            Some(team) => standings.push(label, team),
            None => warn!(sport = %sport, group = label, "skipping malformed standings entry"),
        }
    }
}

/// Finish a snapshot: rank the groups and refuse to report an empty one as
/// a success.
pub(crate) fn finish(
    source_name: &str,
    mut standings: Standings,
) -> Result<Standings, VarsityError> {
    standings.sort_by_ranking();
    if standings.is_empty() {
        Err(VarsityError::empty(source_name))
    } else {
        Ok(standings)
    }
}
