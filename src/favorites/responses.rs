use crate::favorites::models::SavedLocation;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedLocationsResponse {
    pub error: bool,
    pub locations: Vec<SavedLocation>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveLocationResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SaveLocationResponseError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SavedLocation>,
}

/// All possible reasons why saving a location may be refused.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SaveLocationResponseError {
    InvalidCoordinates,
    DuplicateLocation,
    PersistenceFailure,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveLocationResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<RemoveLocationResponseError>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RemoveLocationResponseError {
    LocationNotFound,
    PersistenceFailure,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyLocationResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SavedLocation>,
}
