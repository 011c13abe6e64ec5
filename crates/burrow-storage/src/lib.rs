//! Mapping store implementations for the Burrow URL shortener.

pub mod memory;

pub use burrow_core::repository::{ReadRepository, Repository, UrlRecord};
pub use memory::InMemoryRepository;
