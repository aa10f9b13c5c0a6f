use crate::favorites::models::SavedLocation;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FavoritesError {
    /// The store falls back to an empty collection when it hits this on load.
    #[error("persisted favorites at {path:?} are not parseable: {reason}")]
    CorruptPersistedState { path: PathBuf, reason: String },

    #[error("'{}' is already saved at {}", .existing.title, .existing.position())]
    DuplicateLocation { existing: SavedLocation },

    #[error("no saved location with id '{id}'")]
    NotFound { id: String },

    /// The backing storage failed to read or write. In-memory state is left
    /// at the last persisted collection.
    #[error("favorites storage failed: {0}")]
    Persistence(String),
}
