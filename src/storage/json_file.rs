use crate::error::FavoritesError;
use crate::favorites::models::SavedLocation;
use crate::storage::interface::FavoritesPersistence;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Persists the collection as a bare JSON array in a single file. A missing
/// or empty file reads back as an empty collection.
#[derive(Clone, Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: PathBuf) -> Self {
        JsonFileStorage { path }
    }
}

impl FavoritesPersistence for JsonFileStorage {
    async fn load(&self) -> Result<Vec<SavedLocation>, FavoritesError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => {
                return Err(FavoritesError::Persistence(format!(
                    "failed to read {:?}: {error}",
                    self.path
                )))
            }
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content).map_err(|error| FavoritesError::CorruptPersistedState {
            path: self.path.clone(),
            reason: error.to_string(),
        })
    }

    async fn persist(&self, locations: &[SavedLocation]) -> Result<(), FavoritesError> {
        let content = serde_json::to_string(locations).map_err(|error| {
            FavoritesError::Persistence(format!("failed to serialize favorites: {error}"))
        })?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|error| {
                    FavoritesError::Persistence(format!(
                        "failed to create directory {parent:?}: {error}"
                    ))
                })?;
            }
        }
        tokio::fs::write(&self.path, content).await.map_err(|error| {
            FavoritesError::Persistence(format!("failed to write {:?}: {error}", self.path))
        })
    }
}
