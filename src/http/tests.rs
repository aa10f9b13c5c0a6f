use crate::app_context::AppContext;
use crate::cli::tests::fake_args;
use crate::favorites::store::FavoritesStore;
use crate::http::router;
use crate::storage::json_file::JsonFileStorage;
use axum_test::TestServer;
use std::env::temp_dir;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

pub fn temp_favorites_file() -> PathBuf {
    let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = temp_dir().join(format!("placemarks_test_{id}.json"));
    // The counter restarts with each test process, so clear any file left
    // behind by a previous run to keep tests hermetic.
    let _ = std::fs::remove_file(&path);
    path
}

pub async fn test_server() -> TestServer {
    let args = fake_args(temp_favorites_file());
    let favorites = FavoritesStore::new(JsonFileStorage::new(args.favorites_file.clone()));
    favorites
        .initialize()
        .await
        .expect("Failed to initialize the favorites store.");
    let app_context = AppContext { favorites };
    let router = router::new(&args, app_context);
    TestServer::new(router).expect("Failed to run test server.")
}
