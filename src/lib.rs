//! HTTP relay between a Japanese/English front end and a public
//! machine-translation endpoint, with optional Hepburn romanization.

pub mod config;
pub mod error;
pub mod handlers;
pub mod romanize;
pub mod routes;
pub mod state;
pub mod translate;

pub use config::Config;
pub use error::RelayError;
pub use routes::create_routes;
pub use state::AppState;
