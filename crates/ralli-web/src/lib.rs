//! Ralli web server
//!
//! Serves the admin console, the component showcase pages and the JSON API
//! the admin page drives.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

// Re-export the main functions
pub use server::build_app;
pub use state::AppState;
