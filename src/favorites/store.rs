use crate::error::FavoritesError;
use crate::favorites::models::SavedLocation;
use crate::favorites::observers::{ObserverRegistry, ObserverToken, SnapshotObserver};
use crate::map::models::LatLng;
use crate::storage::interface::FavoritesPersistence;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Owns the ordered collection of saved locations.
///
/// Every mutation is written through to the backing storage before it
/// becomes visible in memory, so the persisted form and the in-memory form
/// never diverge. The write lock is held across the persistence call, which
/// serializes mutations even on a multi-threaded host.
#[derive(Clone)]
pub struct FavoritesStore<S> {
    storage: S,
    entries: Arc<RwLock<Vec<SavedLocation>>>,
    observers: ObserverRegistry,
}

impl<S: FavoritesPersistence> FavoritesStore<S> {
    pub fn new(storage: S) -> Self {
        FavoritesStore {
            storage,
            entries: Arc::default(),
            observers: ObserverRegistry::default(),
        }
    }

    /// Loads the persisted collection, replacing whatever is in memory.
    ///
    /// A missing storage slot yields an empty collection. A corrupt slot
    /// also yields an empty collection, with the error returned so the
    /// caller can report it instead of crashing. Calling this again simply
    /// reloads from storage.
    pub async fn initialize(&self) -> Result<(), FavoritesError> {
        let mut entries = self.entries.write().await;
        match self.storage.load().await {
            Ok(loaded) => {
                *entries = loaded;
                Ok(())
            }
            Err(error @ FavoritesError::CorruptPersistedState { .. }) => {
                entries.clear();
                Err(error)
            }
            Err(error) => Err(error),
        }
    }

    /// Appends a new saved location unless one already exists nearby.
    ///
    /// The duplicate check is a linear scan over the collection. At the
    /// expected scale (a personal bookmark list, tens to low hundreds of
    /// entries) that beats maintaining a spatial index.
    pub async fn save(
        &self,
        title: &str,
        address: &str,
        position: LatLng,
    ) -> Result<SavedLocation, FavoritesError> {
        let mut entries = self.entries.write().await;
        if let Some(existing) = entries
            .iter()
            .find(|entry| entry.position().is_near(position))
        {
            return Err(FavoritesError::DuplicateLocation {
                existing: existing.clone(),
            });
        }
        let location = SavedLocation::new(title, address, position);
        let mut updated = entries.clone();
        updated.push(location.clone());
        // Memory is only assigned after the write is acknowledged, so a
        // storage failure leaves the store exactly as it was.
        self.storage.persist(&updated).await?;
        *entries = updated;
        // Notified under the write guard so snapshots reach observers in
        // commit order. Observers are synchronous closures and cannot
        // re-enter the store, so this cannot deadlock.
        self.observers.notify(entries.as_slice()).await;
        Ok(location)
    }

    pub async fn remove(&self, id: &str) -> Result<(), FavoritesError> {
        let mut entries = self.entries.write().await;
        if !entries.iter().any(|entry| entry.id == id) {
            return Err(FavoritesError::NotFound { id: id.to_string() });
        }
        let updated = entries
            .iter()
            .filter(|entry| entry.id != id)
            .cloned()
            .collect::<Vec<_>>();
        self.storage.persist(&updated).await?;
        *entries = updated;
        self.observers.notify(entries.as_slice()).await;
        Ok(())
    }

    /// Returns a detached snapshot of the collection in insertion order.
    pub async fn list(&self) -> Vec<SavedLocation> {
        self.entries.read().await.clone()
    }

    /// Returns the first entry (in insertion order) within the proximity
    /// tolerance of `position`.
    pub async fn find_near(&self, position: LatLng) -> Option<SavedLocation> {
        self.entries
            .read()
            .await
            .iter()
            .find(|entry| entry.position().is_near(position))
            .cloned()
    }

    pub async fn subscribe(&self, observer: SnapshotObserver) -> ObserverToken {
        self.observers.add(observer).await
    }

    pub async fn unsubscribe(&self, token: ObserverToken) {
        self.observers.remove(token).await;
    }
}
