//! HTTP gateway for the Burrow URL shortener.
//!
//! Serves a small HTML form, a JSON API and the redirect endpoint on top of
//! the shortener and redirector services.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
