//! Generic actor framework for write-once record tables.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that record kinds implement to be stored by actors
//! - [`ResourceActor`] - Generic actor that owns one table
//! - [`ResourceClient`] - Type-safe async handle to an actor
//! - [`Journal`] - Durable backend behind a table ([`JsonSnapshot`] on disk)
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod journal;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
pub use self::journal::{Journal, JournalError, JsonSnapshot};
