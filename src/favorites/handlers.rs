use crate::app_context::AppContext;
use crate::error::FavoritesError;
use crate::favorites::requests::SaveLocationRequest;
use crate::favorites::responses::{
    NearbyLocationResponse, RemoveLocationResponse, RemoveLocationResponseError,
    SaveLocationResponse, SaveLocationResponseError, SavedLocationsResponse,
};
use crate::map::models::LatLng;
use crate::query_params::LatLngQueryParams;
use crate::storage::json_file::JsonFileStorage;
use axum::extract::{Path, Query, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn list(
    State(app_context): State<AppContext<JsonFileStorage>>,
) -> Json<SavedLocationsResponse> {
    let locations = app_context.favorites.list().await;
    Json(SavedLocationsResponse {
        error: false,
        locations,
    })
}

#[axum::debug_handler]
pub async fn save(
    State(app_context): State<AppContext<JsonFileStorage>>,
    Json(request): Json<SaveLocationRequest>,
) -> Json<SaveLocationResponse> {
    let position = LatLng {
        lat: request.lat,
        lng: request.lng,
    };
    if !position.is_valid() {
        return Json(SaveLocationResponse {
            error: true,
            error_code: Some(SaveLocationResponseError::InvalidCoordinates),
            location: None,
        });
    }
    let response = match app_context
        .favorites
        .save(&request.title, &request.address, position)
        .await
    {
        Ok(location) => SaveLocationResponse {
            error: false,
            error_code: None,
            location: Some(location),
        },
        Err(FavoritesError::DuplicateLocation { existing }) => {
            tracing::info!(
                task = "duplicate_location_rejected",
                existing_id = %existing.id,
            );
            SaveLocationResponse {
                error: true,
                error_code: Some(SaveLocationResponseError::DuplicateLocation),
                location: None,
            }
        }
        Err(error) => {
            tracing::error!("Failed to save location: {error}");
            SaveLocationResponse {
                error: true,
                error_code: Some(SaveLocationResponseError::PersistenceFailure),
                location: None,
            }
        }
    };
    Json(response)
}

#[axum::debug_handler]
pub async fn remove(
    Path(location_id): Path<String>,
    State(app_context): State<AppContext<JsonFileStorage>>,
) -> Json<RemoveLocationResponse> {
    let response = match app_context.favorites.remove(&location_id).await {
        Ok(()) => RemoveLocationResponse {
            error: false,
            error_code: None,
        },
        Err(FavoritesError::NotFound { .. }) => RemoveLocationResponse {
            error: true,
            error_code: Some(RemoveLocationResponseError::LocationNotFound),
        },
        Err(error) => {
            tracing::error!("Failed to remove location '{location_id}': {error}");
            RemoveLocationResponse {
                error: true,
                error_code: Some(RemoveLocationResponseError::PersistenceFailure),
            }
        }
    };
    Json(response)
}

#[axum::debug_handler]
pub async fn find_near(
    Query(params): Query<LatLngQueryParams>,
    State(app_context): State<AppContext<JsonFileStorage>>,
) -> Json<NearbyLocationResponse> {
    let position = LatLng {
        lat: params.lat,
        lng: params.lng,
    };
    let location = app_context.favorites.find_near(position).await;
    Json(NearbyLocationResponse {
        error: false,
        location,
    })
}
