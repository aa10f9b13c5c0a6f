use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveLocationRequest {
    pub title: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}
