//! Provides simple error type for communicating registry failures.
use thiserror::Error;

use crate::ErrorKind;

/// Error type for registry operations.
///
/// The registry exists to produce errors, not to suffer them; the only way an
/// operation itself can fail is asking for a kind that was never registered.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested kind has no template in the registry. This is a
    /// configuration bug in the caller and is reported rather than masked
    /// with a generic response.
    #[error("no error response registered for kind {0}")]
    UnknownKind(ErrorKind),
}
