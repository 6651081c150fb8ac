//! Application state management

use ralli_admin::{AdminConsole, MemoryStore};
use ralli_core::Config;
use std::sync::Arc;
use tracing::info;

/// Application state holding the admin console
#[derive(Debug, Clone)]
pub struct AppState {
    /// Admin console shared by every request
    pub console: Arc<AdminConsole>,
}

impl AppState {
    /// Create new application state, seeding the store when configured to
    pub fn new(config: &Config) -> Self {
        let store = if config.admin.seed_fixtures {
            info!("Seeding admin console with fixture records");
            MemoryStore::seeded()
        } else {
            MemoryStore::new()
        };

        Self {
            console: Arc::new(AdminConsole::new(store)),
        }
    }
}
