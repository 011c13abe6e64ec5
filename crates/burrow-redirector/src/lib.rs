//! Redirector service library.
//!
//! This crate provides a [`RedirectorService`] that resolves short codes to
//! their original URLs through a read-only view of the mapping store.
//!
//! # Example
//!
//! ```rust
//! use burrow_redirector::RedirectorService;
//! use burrow_storage::InMemoryRepository;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = RedirectorService::new(InMemoryRepository::new());
//!
//! match service.redirect("ZZZZZZ").await? {
//!     Some(url) => println!("Redirect to: {}", url),
//!     None => println!("This link was not found."),
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod redirector;
pub mod service;

pub use error::{RedirectorError, Result};
pub use redirector::Redirector;
pub use service::RedirectorService;
