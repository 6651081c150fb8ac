//! Core record types for the admin console

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record identifier, the stringified one-based insertion index
pub type RecordId = String;

/// A sport-scoped metric that lines are written against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatType {
    /// Record id
    pub id: RecordId,
    /// Display name, e.g. `Points`
    pub name: String,
    /// Free text description
    pub description: String,
    /// Composite `<sport_code>-<line_code>` identifier
    pub num_id: String,
    /// Sport name
    pub sport: String,
    /// Five-digit sport code
    pub sport_code: String,
    /// Five-digit line code, unique within the sport
    pub line_code: String,
}

/// A player that lines can be offered on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Record id
    pub id: RecordId,
    /// Full name
    pub name: String,
    /// Sport name
    pub sport: String,
    /// Team abbreviation
    pub team: String,
    /// Jersey number as entered
    pub jersey_number: String,
    /// Position abbreviation
    pub position: String,
    /// Uppercase initials of the name
    pub avatar: String,
}

/// Line lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStatus {
    /// Open for picks
    Active,
    /// Settled over or under
    Resolved,
    /// Voided
    Cancelled,
}

impl LineStatus {
    /// Whether the line can still be resolved
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for LineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Resolved => write!(f, "resolved"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// An over/under proposition on a player's stat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Record id
    pub id: RecordId,
    /// Referenced player
    pub player_id: RecordId,
    /// Player name at creation time
    pub player_name: String,
    /// Referenced stat type
    pub stat_type_id: RecordId,
    /// Stat type name at creation time
    pub stat_name: String,
    /// Threshold, e.g. `28.5`
    pub value: f64,
    /// Sport name, taken from the player
    pub sport: String,
    /// Free text kickoff label, e.g. `Tonight 8:00 PM`
    pub game_time: String,
    /// Lifecycle status
    pub status: LineStatus,
    /// Display price for the over side
    pub over_odds: String,
    /// Display price for the under side
    pub under_odds: String,
}

/// Game lobby status
///
/// `Cancelled` sits outside the waiting/active/completed progression and is
/// only reachable through [`GameAction::Cancel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Lobby is filling up
    Waiting,
    /// Game in progress
    Active,
    /// Game ended normally
    Completed,
    /// Game called off
    Cancelled,
}

impl GameStatus {
    /// Whether the game can still be ended or cancelled
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Waiting => write!(f, "waiting"),
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Host of a game lobby
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    /// Display name
    pub name: String,
    /// Initials
    pub avatar: String,
}

/// A multi-participant betting lobby
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Record id
    pub id: RecordId,
    /// Lobby title
    pub title: String,
    /// Sport name
    pub sport: String,
    /// Current participant count
    pub participants: u32,
    /// Participant cap
    pub max_participants: u32,
    /// Buy-in in whole dollars
    pub buy_in: u32,
    /// Prize pool in whole dollars
    pub prize_pool: u32,
    /// Number of parlay legs
    pub legs: u32,
    /// Free text countdown label, e.g. `2h 15m`
    pub time_left: String,
    /// Lifecycle status
    pub status: GameStatus,
    /// Lobby host
    pub host: Host,
}

/// How an admin settles a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineOutcome {
    /// The over hit
    Over,
    /// The under hit
    Under,
    /// Void the line
    Cancel,
}

impl LineOutcome {
    /// Status a line moves to under this outcome
    #[must_use]
    pub const fn target_status(self) -> LineStatus {
        match self {
            Self::Over | Self::Under => LineStatus::Resolved,
            Self::Cancel => LineStatus::Cancelled,
        }
    }
}

impl fmt::Display for LineOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Over => write!(f, "over"),
            Self::Under => write!(f, "under"),
            Self::Cancel => write!(f, "cancel"),
        }
    }
}

impl FromStr for LineOutcome {
    type Err = crate::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "over" => Ok(Self::Over),
            "under" => Ok(Self::Under),
            "cancel" => Ok(Self::Cancel),
            other => Err(crate::Error::InvalidValue {
                field: "outcome",
                value: other.to_string(),
            }),
        }
    }
}

/// How an admin closes a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameAction {
    /// End the game normally
    End,
    /// Call the game off
    Cancel,
}

impl GameAction {
    /// Status a game moves to under this action
    #[must_use]
    pub const fn target_status(self) -> GameStatus {
        match self {
            Self::End => GameStatus::Completed,
            Self::Cancel => GameStatus::Cancelled,
        }
    }
}

impl FromStr for GameAction {
    type Err = crate::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "end" => Ok(Self::End),
            "cancel" => Ok(Self::Cancel),
            other => Err(crate::Error::InvalidValue {
                field: "action",
                value: other.to_string(),
            }),
        }
    }
}

/// Admin console tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    /// Stat type management
    #[default]
    Stats,
    /// Player management
    Players,
    /// Line creation
    Lines,
    /// Line settlement
    ResolveLines,
    /// Game settlement
    ResolveGames,
}

impl Tab {
    /// All tabs in display order
    pub const ALL: [Self; 5] = [
        Self::Stats,
        Self::Players,
        Self::Lines,
        Self::ResolveLines,
        Self::ResolveGames,
    ];

    /// URL slug of the tab
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Stats => "stats",
            Self::Players => "players",
            Self::Lines => "lines",
            Self::ResolveLines => "resolve-lines",
            Self::ResolveGames => "resolve-games",
        }
    }

    /// Tab caption
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stats => "Stat Types",
            Self::Players => "Players",
            Self::Lines => "Create Lines",
            Self::ResolveLines => "Resolve Lines",
            Self::ResolveGames => "Resolve Games",
        }
    }
}

impl FromStr for Tab {
    type Err = crate::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.slug() == value)
            .ok_or_else(|| crate::Error::InvalidValue {
                field: "tab",
                value: value.to_string(),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(LineOutcome::Over, LineStatus::Resolved)]
    #[case(LineOutcome::Under, LineStatus::Resolved)]
    #[case(LineOutcome::Cancel, LineStatus::Cancelled)]
    fn test_line_outcome_target(#[case] outcome: LineOutcome, #[case] expected: LineStatus) {
        assert_eq!(outcome.target_status(), expected);
    }

    #[test]
    fn test_game_action_target() {
        assert_eq!(GameAction::End.target_status(), GameStatus::Completed);
        assert_eq!(GameAction::Cancel.target_status(), GameStatus::Cancelled);
    }

    #[test]
    fn test_outcome_parsing() {
        assert_eq!("over".parse::<LineOutcome>().unwrap(), LineOutcome::Over);
        assert_eq!("cancel".parse::<LineOutcome>().unwrap(), LineOutcome::Cancel);
        assert!("push".parse::<LineOutcome>().is_err());
        assert!("OVER".parse::<LineOutcome>().is_err());
    }

    #[test]
    fn test_action_parsing() {
        assert_eq!("end".parse::<GameAction>().unwrap(), GameAction::End);
        let err = "pause".parse::<GameAction>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid action: pause");
    }

    #[test]
    fn test_tab_slugs_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(tab.slug().parse::<Tab>().unwrap(), tab);
        }
        assert_eq!(Tab::default(), Tab::Stats);
        assert!("settings".parse::<Tab>().is_err());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&LineStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
        assert_eq!(
            serde_json::to_string(&GameStatus::Completed).unwrap(),
            "\"completed\""
        );
        assert_eq!(
            serde_json::to_string(&Tab::ResolveGames).unwrap(),
            "\"resolve-games\""
        );
    }

    #[test]
    fn test_only_active_records_are_open() {
        assert!(LineStatus::Active.is_active());
        assert!(!LineStatus::Resolved.is_active());
        assert!(GameStatus::Active.is_active());
        assert!(!GameStatus::Waiting.is_active());
        assert!(!GameStatus::Cancelled.is_active());
    }
}
