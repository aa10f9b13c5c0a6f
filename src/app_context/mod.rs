use crate::favorites::store::FavoritesStore;
use crate::storage::interface::FavoritesPersistence;

#[derive(Clone)]
pub struct AppContext<S: FavoritesPersistence> {
    pub favorites: FavoritesStore<S>,
}
