//! Core rock–paper–scissors particle simulation library.
//!
//! Main components:
//! - [`types`] — particle kinds and the dominance relation.
//! - [`particle`] — the mobile agent: position, velocity, kind.
//! - [`collision`] — pure pair resolver: dominance, elastic response, separation.
//! - [`config`] — simulation parameters and validation.
//! - [`engine`] — owns the particle collection and advances it per tick.
//! - [`error`] — error taxonomy.

pub mod collision;
pub mod config;
pub mod engine;
pub mod error;
pub mod particle;
pub mod types;
