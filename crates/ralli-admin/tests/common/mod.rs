//! Shared helpers for the admin console integration tests

#![allow(dead_code)]

use ralli_admin::{NewLine, NewPlayer, NewStatType};
use ralli_core::{Line, LineStatus};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize test logging (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// A complete stat type form
pub fn stat_type_form(name: &str, sport: &str) -> NewStatType {
    NewStatType {
        name: name.to_string(),
        description: format!("Total {} in the game", name.to_lowercase()),
        sport: sport.to_string(),
    }
}

/// A complete player form
pub fn player_form(name: &str, sport: &str) -> NewPlayer {
    NewPlayer {
        name: name.to_string(),
        sport: sport.to_string(),
        team: "DAL".to_string(),
        jersey_number: "77".to_string(),
        position: "PG".to_string(),
    }
}

/// A complete line form
pub fn line_form(player_id: &str, stat_type_id: &str, value: &str) -> NewLine {
    NewLine {
        player_id: player_id.to_string(),
        stat_type_id: stat_type_id.to_string(),
        value: value.to_string(),
        game_time: "Tonight 7:30 PM".to_string(),
        over_odds: "+105".to_string(),
        under_odds: "-125".to_string(),
    }
}

/// A bare active line for filtering tests
pub fn line(id: usize, player_name: &str, stat_name: &str, sport: &str) -> Line {
    Line {
        id: id.to_string(),
        player_id: id.to_string(),
        player_name: player_name.to_string(),
        stat_type_id: "1".to_string(),
        stat_name: stat_name.to_string(),
        value: 10.5,
        sport: sport.to_string(),
        game_time: "Tonight".to_string(),
        status: LineStatus::Active,
        over_odds: "-110".to_string(),
        under_odds: "-110".to_string(),
    }
}
