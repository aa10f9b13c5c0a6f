use crate::app_context::AppContext;
use crate::favorites::store::FavoritesStore;
use crate::storage::json_file::JsonFileStorage;
use clap::Parser;

mod app_context;
mod cli;
mod error;
mod favorites;
mod health;
mod http;
mod logging;
mod map;
mod query_params;
mod storage;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    logging::init();

    let storage = JsonFileStorage::new(args.favorites_file.clone());
    let favorites = FavoritesStore::new(storage);
    if let Err(error) = favorites.initialize().await {
        tracing::warn!("Starting with an empty favorites collection: {error}");
    }
    favorites
        .subscribe(Box::new(|snapshot| {
            tracing::info!(task = "favorites_changed", count = snapshot.len());
        }))
        .await;

    let app_context = AppContext { favorites };
    let router = http::router::new(&args, app_context);
    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind the listen address.");
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(listener, router)
        .await
        .expect("Failed to run the HTTP server.");
}
