//! Core types and traits for the Burrow URL shortener.
//!
//! This crate provides the short code type, the mapping store contracts and
//! the error types shared by the shortener, the redirector and the gateway.

pub mod error;
pub mod repository;
pub mod shortcode;
pub mod shortener;

pub use error::{CoreError, ShortenerError, StorageError};
pub use repository::{ReadRepository, Repository, UrlRecord};
pub use shortcode::ShortCode;
pub use shortener::Shortener;
