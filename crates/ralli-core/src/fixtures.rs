//! Seed records the admin console starts with

use crate::types::{Game, GameStatus, Host, Line, LineStatus, Player, StatType};

fn stat_type(
    id: &str,
    name: &str,
    description: &str,
    sport: &str,
    sport_code: &str,
    line_code: &str,
) -> StatType {
    StatType {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        num_id: crate::utils::compose_num_id(sport_code, line_code),
        sport: sport.to_string(),
        sport_code: sport_code.to_string(),
        line_code: line_code.to_string(),
    }
}

fn player(
    id: &str,
    name: &str,
    sport: &str,
    team: &str,
    jersey_number: &str,
    position: &str,
) -> Player {
    Player {
        id: id.to_string(),
        name: name.to_string(),
        sport: sport.to_string(),
        team: team.to_string(),
        jersey_number: jersey_number.to_string(),
        position: position.to_string(),
        avatar: crate::utils::avatar_initials(name),
    }
}

/// Seed stat types
#[must_use]
pub fn stat_types() -> Vec<StatType> {
    vec![
        stat_type(
            "1",
            "Points",
            "Total points scored in the game",
            "NBA",
            "00001",
            "00001",
        ),
        stat_type(
            "2",
            "3-Pointers Made",
            "Total three-point shots made",
            "NBA",
            "00001",
            "00002",
        ),
        stat_type(
            "3",
            "Passing Yards",
            "Total passing yards in the game",
            "NFL",
            "00002",
            "00001",
        ),
        stat_type(
            "4",
            "Goals Scored",
            "Total goals scored in the match",
            "Soccer",
            "00003",
            "00001",
        ),
    ]
}

/// Seed players
#[must_use]
pub fn players() -> Vec<Player> {
    vec![
        player("1", "LeBron James", "NBA", "LAL", "23", "SF"),
        player("2", "Josh Allen", "NFL", "BUF", "17", "QB"),
        player("3", "Lionel Messi", "Soccer", "MIA", "10", "FW"),
    ]
}

/// Seed lines, one per seeded NBA and NFL player
#[must_use]
pub fn lines() -> Vec<Line> {
    vec![
        Line {
            id: "1".to_string(),
            player_id: "1".to_string(),
            player_name: "LeBron James".to_string(),
            stat_type_id: "1".to_string(),
            stat_name: "Points".to_string(),
            value: 28.5,
            sport: "NBA".to_string(),
            game_time: "Tonight 8:00 PM".to_string(),
            status: LineStatus::Active,
            over_odds: "+110".to_string(),
            under_odds: "-130".to_string(),
        },
        Line {
            id: "2".to_string(),
            player_id: "2".to_string(),
            player_name: "Josh Allen".to_string(),
            stat_type_id: "3".to_string(),
            stat_name: "Passing Yards".to_string(),
            value: 285.5,
            sport: "NFL".to_string(),
            game_time: "Sunday 1:00 PM".to_string(),
            status: LineStatus::Active,
            over_odds: "-110".to_string(),
            under_odds: "-110".to_string(),
        },
    ]
}

/// Seed game lobbies
#[must_use]
pub fn games() -> Vec<Game> {
    vec![
        Game {
            id: "1".to_string(),
            title: "🔥 NBA Sunday Showdown".to_string(),
            sport: "NBA".to_string(),
            participants: 9,
            max_participants: 12,
            buy_in: 25,
            prize_pool: 280,
            legs: 4,
            time_left: "2h 15m".to_string(),
            status: GameStatus::Active,
            host: Host {
                name: "Jack Sturt".to_string(),
                avatar: "JS".to_string(),
            },
        },
        Game {
            id: "2".to_string(),
            title: "Monday Night Football".to_string(),
            sport: "NFL".to_string(),
            participants: 11,
            max_participants: 12,
            buy_in: 50,
            prize_pool: 580,
            legs: 5,
            time_left: "45m".to_string(),
            status: GameStatus::Active,
            host: Host {
                name: "Mike Chen".to_string(),
                avatar: "MC".to_string(),
            },
        },
    ]
}
