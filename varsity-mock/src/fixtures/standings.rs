use varsity_types::{Sport, Standings, TeamRecord};

fn row(
    group: &str,
    name: &str,
    wins: u32,
    losses: u32,
    extra: Option<(u32, u32)>,
    games_back: f64,
) -> TeamRecord {
    let (overtime_losses, points) = match extra {
        Some((otl, pts)) => (Some(otl), Some(pts)),
        None => (None, None),
    };
    TeamRecord {
        display_name: name.to_string(),
        wins,
        losses,
        ties: None,
        overtime_losses,
        points,
        win_percentage: TeamRecord::derived_win_percentage(
            wins,
            losses,
            overtime_losses.unwrap_or(0),
        ),
        games_back,
        group: group.to_string(),
    }
}

pub fn for_sport(sport: Sport) -> Standings {
    let mut standings = Standings::new(sport);
    match sport {
        Sport::Nba => {
            standings.push("East", row("East", "Boston Celtics", 60, 22, None, 0.0));
            standings.push("East", row("East", "New York Knicks", 51, 31, None, 9.0));
            standings.push("West", row("West", "Oklahoma City Thunder", 57, 25, None, 0.0));
            standings.push("West", row("West", "Denver Nuggets", 50, 32, None, 7.0));
        }
        Sport::Nfl => {
            standings.push("AFC", row("AFC", "Buffalo Bills", 13, 4, None, 0.0));
            standings.push("AFC", row("AFC", "Kansas City Chiefs", 12, 5, None, 1.0));
            standings.push("NFC", row("NFC", "Detroit Lions", 14, 3, None, 0.0));
            standings.push("NFC", row("NFC", "Philadelphia Eagles", 12, 5, None, 2.0));
        }
        Sport::Mlb => {
            standings.push("AL", row("AL", "New York Yankees", 94, 68, None, 0.0));
            standings.push("AL", row("AL", "Houston Astros", 88, 74, None, 6.0));
            standings.push("NL", row("NL", "Los Angeles Dodgers", 98, 64, None, 0.0));
            standings.push("NL", row("NL", "Atlanta Braves", 89, 73, None, 9.0));
        }
        Sport::Nhl => {
            standings.push("East", row("East", "Florida Panthers", 33, 19, Some((2, 68)), 0.0));
            standings.push("East", row("East", "Boston Bruins", 30, 20, Some((4, 64)), 0.0));
            standings.push("West", row("West", "Dallas Stars", 31, 18, Some((3, 65)), 0.0));
            standings.push("West", row("West", "Winnipeg Jets", 30, 19, Some((3, 63)), 0.0));
        }
    }
    standings.sort_by_ranking();
    standings
}
