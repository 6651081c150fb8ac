//! Record storage behind the admin console

use parking_lot::RwLock;
use ralli_core::{Game, Line, Player, Result, StatType, fixtures};

/// Storage for the four admin record collections
///
/// Collections are insertion ordered. Records are never removed; they are
/// either appended or updated in place by id.
pub trait AdminStore: Send + Sync {
    /// All stat types in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn stat_types(&self) -> Result<Vec<StatType>>;

    /// All players in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn players(&self) -> Result<Vec<Player>>;

    /// All lines in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn lines(&self) -> Result<Vec<Line>>;

    /// All games in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn games(&self) -> Result<Vec<Game>>;

    /// Append a stat type
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn append_stat_type(&self, stat_type: StatType) -> Result<()>;

    /// Append a player
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn append_player(&self, player: Player) -> Result<()>;

    /// Append a line
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn append_line(&self, line: Line) -> Result<()>;

    /// Apply `update` to the line with `id`, returning the updated record or
    /// `None` when no line has that id
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn update_line(&self, id: &str, update: &dyn Fn(&mut Line)) -> Result<Option<Line>>;

    /// Apply `update` to the game with `id`, returning the updated record or
    /// `None` when no game has that id
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn update_game(&self, id: &str, update: &dyn Fn(&mut Game)) -> Result<Option<Game>>;
}

#[derive(Debug, Default)]
struct Collections {
    stat_types: Vec<StatType>,
    players: Vec<Player>,
    lines: Vec<Line>,
    games: Vec<Game>,
}

/// Process-local store, everything is lost on restart
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the built-in seed records
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_records(
            fixtures::stat_types(),
            fixtures::players(),
            fixtures::lines(),
            fixtures::games(),
        )
    }

    /// Create a store holding the given records
    #[must_use]
    pub fn from_records(
        stat_types: Vec<StatType>,
        players: Vec<Player>,
        lines: Vec<Line>,
        games: Vec<Game>,
    ) -> Self {
        Self {
            inner: RwLock::new(Collections {
                stat_types,
                players,
                lines,
                games,
            }),
        }
    }
}

impl AdminStore for MemoryStore {
    fn stat_types(&self) -> Result<Vec<StatType>> {
        Ok(self.inner.read().stat_types.clone())
    }

    fn players(&self) -> Result<Vec<Player>> {
        Ok(self.inner.read().players.clone())
    }

    fn lines(&self) -> Result<Vec<Line>> {
        Ok(self.inner.read().lines.clone())
    }

    fn games(&self) -> Result<Vec<Game>> {
        Ok(self.inner.read().games.clone())
    }

    fn append_stat_type(&self, stat_type: StatType) -> Result<()> {
        self.inner.write().stat_types.push(stat_type);
        Ok(())
    }

    fn append_player(&self, player: Player) -> Result<()> {
        self.inner.write().players.push(player);
        Ok(())
    }

    fn append_line(&self, line: Line) -> Result<()> {
        self.inner.write().lines.push(line);
        Ok(())
    }

    fn update_line(&self, id: &str, update: &dyn Fn(&mut Line)) -> Result<Option<Line>> {
        let mut inner = self.inner.write();
        Ok(inner.lines.iter_mut().find(|line| line.id == id).map(|line| {
            update(line);
            line.clone()
        }))
    }

    fn update_game(&self, id: &str, update: &dyn Fn(&mut Game)) -> Result<Option<Game>> {
        let mut inner = self.inner.write();
        Ok(inner.games.iter_mut().find(|game| game.id == id).map(|game| {
            update(game);
            game.clone()
        }))
    }
}
