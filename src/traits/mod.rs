//! Trait definitions for Pexels operations.
//!
//! Each entity type implements the traits its endpoints support, hiding
//! the per-endpoint URL and envelope differences in the implementations.

mod get;
mod list;

pub use get::Get;
pub use list::List;
