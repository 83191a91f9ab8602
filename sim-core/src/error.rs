use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the simulation core.
///
/// Degenerate collisions (coincident centers) are recovered locally in
/// [`crate::collision`] and never become an error; an empty particle
/// collection is a valid steady state, not an error either.
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected configuration; the simulation refuses to start and the
    /// prior state is left unchanged.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
