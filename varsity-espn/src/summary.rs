//! Extraction from ESPN per-game summary payloads: highlights and the
//! two-tier NFL box-score merge.

use serde_json::Value;
use tracing::warn;

use varsity_core::{VarsityError, reconcile, shape};
use varsity_types::{
    Boxscore, Highlight, PassingLine, ReceivingLine, RushingLine, Sport, TeamSide,
};

/// Play text that marks a moment worth keeping, per sport.
const fn play_keywords(sport: Sport) -> &'static [&'static str] {
    match sport {
        Sport::Nfl => &[
            "touchdown", "field goal", "safety", "interception", "fumble", "sack", "pass",
            "run", "kick", "punt", "return", "catch", "turnover",
        ],
        Sport::Mlb => &["home run", "homer", "double", "triple", "strikeout", "walk", "hit"],
        Sport::Nhl => &["goal", "assist", "penalty", "power play", "short handed"],
        Sport::Nba => &[
            "three pointer", "dunk", "layup", "free throw", "rebound", "assist", "steal",
            "block",
        ],
    }
}

/// Collect highlight entries from a summary payload, uncapped and in
/// provider order. The enrichment merger applies the per-game cap.
pub(crate) fn extract_highlights(sport: Sport, payload: &Value) -> Vec<Highlight> {
    let mut highlights = Vec::new();

    // The `highlights` block arrives as a list or as a dict wrapping one.
    if let Some(block) = payload.get("highlights") {
        for entry in shape::list_or(block, "highlights") {
            let title = shape::str_of(entry, "headline");
            if !title.is_empty() {
                highlights.push(Highlight {
                    title: title.to_string(),
                    description: shape::str_of(entry, "description").to_string(),
                });
            }
        }
    }

    // Last 5 plays whose text matches the sport's keyword set.
    if let Some(block) = payload.get("plays") {
        let plays = shape::list_or(block, "plays");
        let keywords = play_keywords(sport);
        let mut key_plays: Vec<&str> = Vec::new();
        for play in plays.iter().rev().take(5).rev() {
            let text = shape::str_of(play, "text");
            if text.is_empty() {
                continue;
            }
            let lower = text.to_lowercase();
            if keywords.iter().any(|k| lower.contains(k)) {
                key_plays.push(text);
            }
        }
        if !key_plays.is_empty() {
            highlights.push(Highlight {
                title: "Key Plays".to_string(),
                description: key_plays.join(" | "),
            });
        }
    }

    // NFL: last 3 scoring plays, kept unconditionally.
    if sport == Sport::Nfl
        && let Some(Value::Array(scoring)) = payload.get("scoring")
    {
        let plays: Vec<&str> = scoring
            .iter()
            .rev()
            .take(3)
            .rev()
            .map(|s| shape::str_of(s, "text"))
            .filter(|t| !t.is_empty())
            .collect();
        if !plays.is_empty() {
            highlights.push(Highlight {
                title: "Scoring Plays".to_string(),
                description: plays.join(" | "),
            });
        }
    }

    highlights
}

/// A team name as the summary payload itself presents it, re-resolved
/// through reconciliation when no display name is given.
fn team_display(team: Option<&Value>) -> String {
    let team = team.unwrap_or(&Value::Null);
    let display = shape::str_of(team, "displayName");
    if display.is_empty() {
        reconcile::display_name(shape::str_of(team, "name"), shape::str_of(team, "location"))
    } else {
        display.to_string()
    }
}

fn athlete_name(entry: &Value) -> String {
    let name = shape::str_of(entry.get("athlete").unwrap_or(&Value::Null), "displayName");
    if name.is_empty() {
        "Unknown".to_string()
    } else {
        name.to_string()
    }
}

fn split_completions(cell: &str) -> (u32, u32) {
    match cell.split_once('/') {
        Some((c, a)) => (shape::parse_or_zero(c), shape::parse_or_zero(a)),
        None => (0, 0),
    }
}

fn stat_cells(entry: &Value) -> Vec<&str> {
    shape::array_of(entry, "stats")
        .iter()
        .map(|v| v.as_str().unwrap_or(""))
        .collect()
}

/// First whitespace-separated token of a leaders segment like `" 71 YDS"`.
fn first_token(segment: &str) -> &str {
    segment.split_whitespace().next().unwrap_or("")
}

/// Build a structured box score from a summary payload.
///
/// Attribution is by exact display-name match against the payload's *own*
/// header team names — the game record's names are expected, but not
/// guaranteed, to agree, so the header is re-resolved independently.
/// Entries matching neither header name are dropped, never misattributed.
pub(crate) fn extract_boxscore(payload: &Value) -> Result<Boxscore, VarsityError> {
    let header = shape::array_of(
        payload
            .pointer("/header/competitions/0")
            .unwrap_or(&Value::Null),
        "competitors",
    );
    if header.len() < 2 {
        return Err(VarsityError::schema("summary header lacks two competitors"));
    }
    let team1 = team_display(header[0].get("team"));
    let team2 = team_display(header[1].get("team"));

    let side_of = |name: &str| {
        if name == team1 {
            Some(TeamSide::Team1)
        } else if name == team2 {
            Some(TeamSide::Team2)
        } else {
            None
        }
    };

    let mut boxscore = Boxscore::default();
    let box_node = payload.get("boxscore").unwrap_or(&Value::Null);

    // Team-level aggregates from boxscore.teams.
    for team in shape::array_of(box_node, "teams") {
        let name = team_display(team.get("team"));
        let Some(side) = side_of(&name) else {
            warn!(team = %name, "dropping unmatched team in boxscore.teams");
            continue;
        };
        let line = boxscore.team_stats.side_mut(side);
        for stat in shape::array_of(team, "statistics") {
            let value = shape::str_of(stat, "displayValue");
            match shape::str_of(stat, "name") {
                "totalYards" => line.total_yards = shape::parse_or_zero(value),
                "netPassingYards" => line.passing_yards = shape::parse_or_zero(value),
                "rushingYards" => line.rushing_yards = shape::parse_or_zero(value),
                "turnovers" => line.turnovers = shape::parse_or_zero(value),
                _ => {}
            }
        }
    }

    // Primary tier: structured per-athlete tables from boxscore.players.
    for team_block in shape::array_of(box_node, "players") {
        let name = team_display(team_block.get("team"));
        let Some(side) = side_of(&name) else {
            warn!(team = %name, "dropping unmatched team in boxscore.players");
            continue;
        };
        for category in shape::array_of(team_block, "statistics") {
            let athletes = shape::array_of(category, "athletes");
            match shape::str_of(category, "name") {
                "passing" => {
                    for entry in athletes {
                        let cells = stat_cells(entry);
                        if cells.len() < 7 {
                            continue;
                        }
                        let (completions, attempts) = split_completions(cells[0]);
                        boxscore.passing.side_mut(side).push(PassingLine {
                            name: athlete_name(entry),
                            completions,
                            attempts,
                            yards: shape::parse_or_zero(cells[1]),
                            touchdowns: shape::parse_or_zero(cells[3]),
                            interceptions: shape::parse_or_zero(cells[4]),
                            rating: shape::parse_or_zero(cells[6]),
                        });
                    }
                }
                "rushing" => {
                    for entry in athletes {
                        let cells = stat_cells(entry);
                        if cells.len() < 5 {
                            continue;
                        }
                        boxscore.rushing.side_mut(side).push(RushingLine {
                            name: athlete_name(entry),
                            carries: shape::parse_or_zero(cells[0]),
                            yards: shape::parse_or_zero(cells[1]),
                            avg: shape::parse_or_zero(cells[2]),
                            touchdowns: shape::parse_or_zero(cells[3]),
                            long: shape::parse_or_zero(cells[4]),
                        });
                    }
                }
                "receiving" => {
                    for entry in athletes {
                        let cells = stat_cells(entry);
                        if cells.len() < 4 {
                            continue;
                        }
                        let receptions: u32 = shape::parse_or_zero(cells[0]);
                        let yards: i32 = shape::parse_or_zero(cells[1]);
                        let avg = if receptions == 0 {
                            0.0
                        } else {
                            f64::from(yards) / f64::from(receptions)
                        };
                        boxscore.receiving.side_mut(side).push(ReceivingLine {
                            name: athlete_name(entry),
                            receptions,
                            yards,
                            avg,
                            long: shape::parse_or_zero(cells[2]),
                            touchdowns: shape::parse_or_zero(cells[3]),
                        });
                    }
                }
                _ => {}
            }
        }
    }

    // Secondary tier: condensed leaders, skip-if-present. Fields the
    // leaders format doesn't carry stay at zero.
    for category in shape::array_of(payload, "leaders") {
        let team_name = team_display(category.get("team"));
        let Some(side) = side_of(&team_name) else {
            continue;
        };
        let leaders = shape::array_of(category, "leaders");
        match shape::str_of(category, "name") {
            "passingYards" => {
                for leader in leaders.iter().take(3) {
                    let display = shape::str_of(leader, "displayValue");
                    let Some((ratio, rest)) = display.split_once(',') else {
                        continue;
                    };
                    let name = athlete_name(leader);
                    if boxscore.passing.side(side).iter().any(|p| p.name == name) {
                        continue;
                    }
                    let (completions, attempts) = split_completions(ratio);
                    boxscore.passing.side_mut(side).push(PassingLine {
                        name,
                        completions,
                        attempts,
                        yards: shape::parse_or_zero(first_token(rest)),
                        touchdowns: 0,
                        interceptions: 0,
                        rating: 0.0,
                    });
                }
            }
            "rushingYards" => {
                for leader in leaders.iter().take(4) {
                    let display = shape::str_of(leader, "displayValue");
                    if !(display.contains("CAR") && display.contains("YDS")) {
                        continue;
                    }
                    let Some((carries_part, yards_part)) = display.split_once(',') else {
                        continue;
                    };
                    let name = athlete_name(leader);
                    if boxscore.rushing.side(side).iter().any(|p| p.name == name) {
                        continue;
                    }
                    boxscore.rushing.side_mut(side).push(RushingLine {
                        name,
                        carries: shape::parse_or_zero(first_token(carries_part)),
                        yards: shape::parse_or_zero(first_token(yards_part)),
                        avg: 0.0,
                        touchdowns: 0,
                        long: 0,
                    });
                }
            }
            "receivingYards" => {
                for leader in leaders.iter().take(4) {
                    let display = shape::str_of(leader, "displayValue");
                    if !(display.contains("REC") && display.contains("YDS")) {
                        continue;
                    }
                    let Some((rec_part, yards_part)) = display.split_once(',') else {
                        continue;
                    };
                    let name = athlete_name(leader);
                    if boxscore.receiving.side(side).iter().any(|p| p.name == name) {
                        continue;
                    }
                    let receptions: u32 = shape::parse_or_zero(first_token(rec_part));
                    let yards: i32 = shape::parse_or_zero(first_token(yards_part));
                    let avg = if receptions == 0 {
                        0.0
                    } else {
                        f64::from(yards) / f64::from(receptions)
                    };
                    boxscore.receiving.side_mut(side).push(ReceivingLine {
                        name,
                        receptions,
                        yards,
                        avg,
                        long: 0,
                        touchdowns: 0,
                    });
                }
            }
            _ => {}
        }
    }

    Ok(boxscore)
}
