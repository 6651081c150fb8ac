//! Admin console operations
//!
//! Every mutation runs under a single writer lock so that id and line code
//! derivation always sees the effect of earlier mutations.

use crate::filter::{self, ListQuery, Listing};
use crate::forms::{NewLine, NewPlayer, NewStatType, require_complete};
use crate::notification::Outcome;
use crate::store::{AdminStore, MemoryStore};
use parking_lot::Mutex;
use ralli_core::catalog::{self, SPORTS, Sport};
use ralli_core::utils::{
    avatar_initials, compose_num_id, next_line_code, next_record_id, parse_line_value,
};
use ralli_core::{Error, Game, GameAction, Line, LineOutcome, LineStatus, Player, Result, StatType};
use serde::Serialize;
use tracing::{debug, error, info, warn};

/// Number of stat types registered for one sport
#[derive(Debug, Clone, Serialize)]
pub struct SportSummary {
    /// Catalog entry
    pub sport: Sport,
    /// Stat types with this sport
    pub stat_count: usize,
}

/// The admin console over an injectable record store
#[derive(Debug)]
pub struct AdminConsole<S = MemoryStore> {
    store: S,
    writer: Mutex<()>,
}

impl AdminConsole<MemoryStore> {
    /// Console over a store holding the seed records
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(MemoryStore::seeded())
    }
}

impl<S: AdminStore> AdminConsole<S> {
    /// Console over `store`
    pub fn new(store: S) -> Self {
        Self {
            store,
            writer: Mutex::new(()),
        }
    }

    /// Underlying store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Create a stat type with the next line code of its sport
    pub fn create_stat_type(&self, form: NewStatType) -> Outcome<StatType> {
        let _writer = self.writer.lock();
        report(self.try_create_stat_type(form), |stat| {
            info!(id = %stat.id, num_id = %stat.num_id, "created stat type");
            "Stat type created successfully!".to_string()
        })
    }

    fn try_create_stat_type(&self, form: NewStatType) -> Result<StatType> {
        let form = require_complete(form)?;
        let sport = catalog::find_sport(&form.sport).ok_or_else(|| Error::UnknownSport {
            sport: form.sport.clone(),
        })?;

        let existing = self.store.stat_types()?;
        let line_code = next_line_code(&existing, sport.code);
        let stat_type = StatType {
            id: next_record_id(existing.len()),
            name: form.name,
            description: form.description,
            num_id: compose_num_id(sport.code, &line_code),
            sport: sport.name.to_string(),
            sport_code: sport.code.to_string(),
            line_code,
        };

        self.store.append_stat_type(stat_type.clone())?;
        Ok(stat_type)
    }

    /// Create a player with avatar initials derived from the name
    pub fn create_player(&self, form: NewPlayer) -> Outcome<Player> {
        let _writer = self.writer.lock();
        report(self.try_create_player(form), |player| {
            info!(id = %player.id, name = %player.name, "added player");
            "Player added successfully!".to_string()
        })
    }

    fn try_create_player(&self, form: NewPlayer) -> Result<Player> {
        let form = require_complete(form)?;
        let sport = catalog::find_sport(&form.sport).ok_or_else(|| Error::UnknownSport {
            sport: form.sport.clone(),
        })?;

        let player = Player {
            id: next_record_id(self.store.players()?.len()),
            avatar: avatar_initials(&form.name),
            name: form.name,
            sport: sport.name.to_string(),
            team: form.team,
            jersey_number: form.jersey_number,
            position: form.position,
        };

        self.store.append_player(player.clone())?;
        Ok(player)
    }

    /// Create an active line, copying the player and stat names into it
    pub fn create_line(&self, form: NewLine) -> Outcome<Line> {
        let _writer = self.writer.lock();
        report(self.try_create_line(form), |line| {
            info!(
                id = %line.id,
                player = %line.player_name,
                stat = %line.stat_name,
                "created line"
            );
            "Line created successfully!".to_string()
        })
    }

    fn try_create_line(&self, form: NewLine) -> Result<Line> {
        let form = require_complete(form)?;
        let value = parse_line_value(&form.value).ok_or_else(|| Error::InvalidLineValue {
            value: form.value.clone(),
        })?;

        let players = self.store.players()?;
        let stat_types = self.store.stat_types()?;
        let (Some(player), Some(stat_type)) = (
            players.iter().find(|p| p.id == form.player_id),
            stat_types.iter().find(|s| s.id == form.stat_type_id),
        ) else {
            return Err(Error::MissingReference {
                player_id: form.player_id,
                stat_type_id: form.stat_type_id,
            });
        };

        let line = Line {
            id: next_record_id(self.store.lines()?.len()),
            player_id: player.id.clone(),
            player_name: player.name.clone(),
            stat_type_id: stat_type.id.clone(),
            stat_name: stat_type.name.clone(),
            value,
            sport: player.sport.clone(),
            game_time: form.game_time,
            status: LineStatus::Active,
            over_odds: form.over_odds,
            under_odds: form.under_odds,
        };

        self.store.append_line(line.clone())?;
        Ok(line)
    }

    /// Settle an active line; the chosen side is not recorded
    pub fn resolve_line(&self, line_id: &str, outcome: LineOutcome) -> Outcome<Line> {
        let _writer = self.writer.lock();
        report(self.try_resolve_line(line_id, outcome), |line| {
            info!(id = %line.id, %outcome, status = %line.status, "resolved line");
            match outcome {
                LineOutcome::Cancel => "Line cancelled successfully!".to_string(),
                side => format!(
                    "Line resolved as {} successfully!",
                    side.to_string().to_uppercase()
                ),
            }
        })
    }

    fn try_resolve_line(&self, line_id: &str, outcome: LineOutcome) -> Result<Line> {
        let current = self
            .store
            .lines()?
            .into_iter()
            .find(|line| line.id == line_id)
            .ok_or_else(|| Error::NotFound {
                kind: "Line",
                id: line_id.to_string(),
            })?;

        if !current.status.is_active() {
            return Err(Error::InvalidTransition {
                kind: "Line",
                id: current.id,
                status: current.status.to_string(),
            });
        }

        let status = outcome.target_status();
        self.store
            .update_line(line_id, &|line| line.status = status)?
            .ok_or_else(|| Error::NotFound {
                kind: "Line",
                id: line_id.to_string(),
            })
    }

    /// End or cancel an active game
    pub fn resolve_game(&self, game_id: &str, action: GameAction) -> Outcome<Game> {
        let _writer = self.writer.lock();
        report(self.try_resolve_game(game_id, action), |game| {
            info!(id = %game.id, status = %game.status, "resolved game");
            match action {
                GameAction::End => "Game ended successfully!".to_string(),
                GameAction::Cancel => "Game cancelled successfully!".to_string(),
            }
        })
    }

    fn try_resolve_game(&self, game_id: &str, action: GameAction) -> Result<Game> {
        let current = self
            .store
            .games()?
            .into_iter()
            .find(|game| game.id == game_id)
            .ok_or_else(|| Error::NotFound {
                kind: "Game",
                id: game_id.to_string(),
            })?;

        if !current.status.is_active() {
            return Err(Error::InvalidTransition {
                kind: "Game",
                id: current.id,
                status: current.status.to_string(),
            });
        }

        let status = action.target_status();
        self.store
            .update_game(game_id, &|game| game.status = status)?
            .ok_or_else(|| Error::NotFound {
                kind: "Game",
                id: game_id.to_string(),
            })
    }

    /// Stat types matching `query`
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn list_stat_types(&self, query: &ListQuery) -> Result<Listing<StatType>> {
        let listing = filter::apply(self.store.stat_types()?, query);
        debug!(search = %query.search, count = listing.count, "listed stat types");
        Ok(listing)
    }

    /// Every player, unfiltered
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn list_players(&self) -> Result<Listing<Player>> {
        Ok(Listing::unfiltered(self.store.players()?))
    }

    /// Lines matching `query`
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn list_lines(&self, query: &ListQuery) -> Result<Listing<Line>> {
        let listing = filter::apply(self.store.lines()?, query);
        debug!(search = %query.search, count = listing.count, "listed lines");
        Ok(listing)
    }

    /// Games matching `query`
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn list_games(&self, query: &ListQuery) -> Result<Listing<Game>> {
        let listing = filter::apply(self.store.games()?, query);
        debug!(search = %query.search, count = listing.count, "listed games");
        Ok(listing)
    }

    /// Stat types offered in the line form for the selected player
    ///
    /// Without a selection, or when the selection is unknown, every stat type
    /// is offered.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn stat_types_for_player(&self, player_id: Option<&str>) -> Result<Vec<StatType>> {
        let stat_types = self.store.stat_types()?;
        let players = self.store.players()?;
        let selected = player_id.and_then(|id| players.iter().find(|p| p.id == id));

        Ok(match selected {
            Some(player) => stat_types
                .into_iter()
                .filter(|stat| stat.sport == player.sport)
                .collect(),
            None => stat_types,
        })
    }

    /// Stat type count per catalog sport, in catalog order
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn sport_summaries(&self) -> Result<Vec<SportSummary>> {
        let stat_types = self.store.stat_types()?;

        Ok(SPORTS
            .iter()
            .map(|sport| SportSummary {
                sport: *sport,
                stat_count: stat_types.iter().filter(|s| s.sport == sport.name).count(),
            })
            .collect())
    }
}

fn report<T>(result: Result<T>, on_success: impl FnOnce(&T) -> String) -> Outcome<T> {
    match result {
        Ok(record) => {
            let message = on_success(&record);
            Outcome::applied(record, message)
        }
        Err(e) if e.is_rejection() => {
            warn!("admin action rejected: {e}");
            Outcome::rejected(&e)
        }
        Err(e) => {
            error!("admin action failed: {e}");
            Outcome::rejected(&e)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::notification::Severity;
    use pretty_assertions::assert_eq;

    fn stat_form(name: &str, sport: &str) -> NewStatType {
        NewStatType {
            name: name.to_string(),
            description: format!("Total {name}"),
            sport: sport.to_string(),
        }
    }

    #[test]
    fn test_stat_type_continues_sport_sequence() {
        let console = AdminConsole::seeded();

        let outcome = console.create_stat_type(stat_form("Rebounds", "NBA"));
        let stat = outcome.record.unwrap();

        assert_eq!(stat.id, "5");
        assert_eq!(stat.line_code, "00003");
        assert_eq!(stat.num_id, "00001-00003");
        assert_eq!(stat.sport_code, "00001");
        assert_eq!(outcome.notification.message, "Stat type created successfully!");
    }

    #[test]
    fn test_first_stat_type_for_new_sport() {
        let console = AdminConsole::seeded();

        let stat = console
            .create_stat_type(stat_form("Home Runs", "Baseball"))
            .record
            .unwrap();

        assert_eq!(stat.num_id, "00004-00001");
    }

    #[test]
    fn test_unknown_sport_is_rejected() {
        let console = AdminConsole::seeded();

        let outcome = console.create_stat_type(stat_form("Wickets", "Cricket"));

        assert!(!outcome.is_applied());
        assert_eq!(outcome.notification.message, "Unknown sport: Cricket");
        assert_eq!(console.store().stat_types().unwrap().len(), 4);
    }

    #[test]
    fn test_stat_types_for_player_follow_player_sport() {
        let console = AdminConsole::seeded();

        let nfl: Vec<String> = console
            .stat_types_for_player(Some("2"))
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(nfl, vec!["Passing Yards"]);

        assert_eq!(console.stat_types_for_player(None).unwrap().len(), 4);
        assert_eq!(console.stat_types_for_player(Some("99")).unwrap().len(), 4);
    }

    #[test]
    fn test_sport_summaries() {
        let console = AdminConsole::seeded();

        let counts: Vec<(&str, usize)> = console
            .sport_summaries()
            .unwrap()
            .iter()
            .map(|s| (s.sport.name, s.stat_count))
            .collect();

        assert_eq!(
            counts,
            vec![("NBA", 2), ("NFL", 1), ("Soccer", 1), ("Baseball", 0)]
        );
    }

    #[test]
    fn test_resolved_line_cannot_be_resolved_again() {
        let console = AdminConsole::seeded();

        assert!(console.resolve_line("1", LineOutcome::Over).is_applied());
        let again = console.resolve_line("1", LineOutcome::Cancel);

        assert_eq!(again.notification.severity, Severity::Error);
        assert_eq!(again.notification.message, "Line 1 is already resolved");
        let line = console.store().lines().unwrap().into_iter().next().unwrap();
        assert_eq!(line.status, LineStatus::Resolved);
    }

    #[test]
    fn test_unknown_line_is_rejected() {
        let console = AdminConsole::seeded();

        let outcome = console.resolve_line("42", LineOutcome::Under);

        assert_eq!(outcome.notification.message, "Line not found: 42");
    }
}
