//! URL shortener service implementation.
//!
//! This crate provides [`ShortenerService`], which draws candidate codes from
//! a [`Generator`](burrow_generator::Generator), retries on collision and
//! stores the mapping in a [`Repository`](burrow_core::Repository). Core
//! types are re-exported from `burrow_core`.

pub mod service;
pub mod settings;

pub use burrow_core::{Shortener, ShortenerError};
pub use service::ShortenerService;
pub use settings::ShortenerSettings;
