//! Record store and admin console operations for Ralli

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod console;
pub mod filter;
pub mod forms;
pub mod notification;
pub mod store;

// Re-export the console surface
pub use console::{AdminConsole, SportSummary};
pub use filter::{ALL_SPORTS, ListQuery, Listing, SportFilter};
pub use forms::{NewLine, NewPlayer, NewStatType};
pub use notification::{Notification, Outcome, Severity};
pub use store::{AdminStore, MemoryStore};
