use chrono::NaiveDate;

use varsity_types::{
    Boxscore, Game, GameState, Highlight, PassingLine, ReceivingLine, RushingLine, Sport,
    TeamStatLine,
};

fn final_game(sport: Sport, id: &str, date: NaiveDate, teams: (&str, &str), score: (u32, u32)) -> Game {
    let mut game = Game {
        id: id.to_string(),
        date: format!("{date}T18:00Z"),
        sport,
        team1: teams.0.to_string(),
        team2: teams.1.to_string(),
        score1: score.0,
        score2: score.1,
        winner: None,
        state: GameState::Final,
        highlights: Vec::new(),
        boxscore: None,
    };
    game.winner = game.derived_winner();
    game
}

pub fn on_day(sport: Sport, date: NaiveDate) -> Vec<Game> {
    match sport {
        Sport::Nfl => vec![
            final_game(sport, "401", date, ("Buffalo Bills", "Miami Dolphins"), (31, 10)),
            Game {
                state: GameState::InProgress,
                ..final_game(sport, "402", date, ("Detroit Lions", "Chicago Bears"), (14, 7))
            },
        ],
        Sport::Nba => vec![final_game(
            sport,
            "501",
            date,
            ("Boston Celtics", "New York Knicks"),
            (112, 104),
        )],
        Sport::Mlb => vec![final_game(
            sport,
            "601",
            date,
            ("New York Yankees", "Boston Red Sox"),
            (5, 3),
        )],
        Sport::Nhl => vec![final_game(
            sport,
            "701",
            date,
            ("Florida Panthers", "Boston Bruins"),
            (4, 2),
        )],
    }
}

pub fn highlights(sport: Sport, event_id: &str) -> Vec<Highlight> {
    match (sport, event_id) {
        (Sport::Nfl, "401") => vec![
            Highlight {
                title: "Allen finds Shakir for the opening score".to_string(),
                description: "18-yard touchdown pass".to_string(),
            },
            Highlight {
                title: "Key Plays".to_string(),
                description: "Cook breaks free for 45 | Interception seals it".to_string(),
            },
        ],
        (Sport::Nba, "501") => vec![Highlight {
            title: "Tatum takes over the fourth".to_string(),
            description: "14 straight points down the stretch".to_string(),
        }],
        _ => Vec::new(),
    }
}

pub fn boxscore(event_id: &str) -> Option<Boxscore> {
    if event_id != "401" {
        return None;
    }
    let mut b = Boxscore::default();
    b.passing.team1.push(PassingLine {
        name: "Josh Allen".to_string(),
        completions: 24,
        attempts: 35,
        yards: 288,
        touchdowns: 3,
        interceptions: 1,
        rating: 112.4,
    });
    b.rushing.team1.push(RushingLine {
        name: "James Cook".to_string(),
        carries: 18,
        yards: 95,
        avg: 5.3,
        touchdowns: 1,
        long: 23,
    });
    b.receiving.team1.push(ReceivingLine {
        name: "Khalil Shakir".to_string(),
        receptions: 8,
        yards: 120,
        avg: 15.0,
        long: 34,
        touchdowns: 2,
    });
    b.passing.team2.push(PassingLine {
        name: "Tua Tagovailoa".to_string(),
        completions: 19,
        attempts: 30,
        yards: 205,
        touchdowns: 1,
        interceptions: 2,
        rating: 81.9,
    });
    b.team_stats.team1 = TeamStatLine {
        total_yards: 412,
        passing_yards: 288,
        rushing_yards: 124,
        turnovers: 1,
    };
    b.team_stats.team2 = TeamStatLine {
        total_yards: 301,
        passing_yards: 205,
        rushing_yards: 96,
        turnovers: 3,
    };
    Some(b)
}
