// Re-export helpers so tests can `use helpers::*;`
pub mod mock_source;

pub use mock_source::MockSource;

use std::sync::Once;

use varsity::{Game, GameState, Highlight, Sport, Standings, TeamRecord};

static INIT: Once = Once::new();

/// Install a test subscriber once so `RUST_LOG` surfaces router decisions
/// while debugging a failing test.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Build a standings snapshot from `(name, wins, losses)` rows under one
/// group label.
pub fn standings_of(sport: Sport, label: &str, rows: &[(&str, u32, u32)]) -> Standings {
    let mut standings = Standings::new(sport);
    for (name, wins, losses) in rows {
        standings.push(
            label,
            TeamRecord {
                display_name: (*name).to_string(),
                wins: *wins,
                losses: *losses,
                ties: None,
                overtime_losses: None,
                points: None,
                win_percentage: TeamRecord::derived_win_percentage(*wins, *losses, 0),
                games_back: 0.0,
                group: label.to_string(),
            },
        );
    }
    standings.sort_by_ranking();
    standings
}

/// A game in the given state with a derived winner.
pub fn game(
    sport: Sport,
    id: &str,
    date: &str,
    teams: (&str, &str),
    score: (u32, u32),
    state: GameState,
) -> Game {
    let mut game = Game {
        id: id.to_string(),
        date: date.to_string(),
        sport,
        team1: teams.0.to_string(),
        team2: teams.1.to_string(),
        score1: score.0,
        score2: score.1,
        winner: None,
        state,
        highlights: Vec::new(),
        boxscore: None,
    };
    game.winner = game.derived_winner();
    game
}

/// A numbered highlight, handy for order assertions.
pub fn highlight(n: usize) -> Highlight {
    Highlight {
        title: format!("highlight {n}"),
        description: format!("description {n}"),
    }
}
