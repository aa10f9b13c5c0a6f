use crate::favorites::models::SavedLocation;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

pub static NEXT_OBSERVER_ID: AtomicUsize = AtomicUsize::new(1);

/// Called synchronously with the full snapshot after every successful
/// mutation; must not block.
pub type SnapshotObserver = Box<dyn Fn(&[SavedLocation]) + Send + Sync>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ObserverToken(usize);

#[derive(Clone, Default)]
pub struct ObserverRegistry {
    storage: Arc<RwLock<HashMap<usize, SnapshotObserver>>>,
}

impl ObserverRegistry {
    pub async fn add(&self, observer: SnapshotObserver) -> ObserverToken {
        let observer_id = NEXT_OBSERVER_ID.fetch_add(1, Ordering::Relaxed);
        self.storage.write().await.insert(observer_id, observer);
        ObserverToken(observer_id)
    }

    pub async fn remove(&self, token: ObserverToken) {
        self.storage.write().await.remove(&token.0);
    }

    pub async fn notify(&self, snapshot: &[SavedLocation]) {
        for observer in self.storage.read().await.values() {
            observer(snapshot);
        }
    }
}
