use crate::error::FavoritesError;
use crate::favorites::models::SavedLocation;

/// Durable slot for the whole collection. An error from `persist` means
/// nothing was written.
pub trait FavoritesPersistence {
    async fn load(&self) -> Result<Vec<SavedLocation>, FavoritesError>;

    async fn persist(&self, locations: &[SavedLocation]) -> Result<(), FavoritesError>;
}
