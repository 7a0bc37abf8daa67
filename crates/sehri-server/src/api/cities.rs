use axum::{
    extract::{Path, State},
    Extension, Json,
};
use sehri_core::areas_for_city;
use sehri_core::registry::{is_supported_city, SUPPORTED_CITIES};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState};

#[derive(Debug, Serialize)]
pub(super) struct CityItem {
    pub name: String,
    pub supported: bool,
    pub spot_count: usize,
}

#[derive(Debug, Serialize)]
pub(super) struct CityAreas {
    pub city: String,
    pub supported: bool,
    pub areas: Vec<String>,
}

/// Supported cities in display order, followed by any other city the data
/// happens to contain.
pub(super) async fn list_cities(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<CityItem>>> {
    let counts = state.catalog.city_counts();

    let mut data: Vec<CityItem> = SUPPORTED_CITIES
        .iter()
        .map(|city| CityItem {
            name: (*city).to_string(),
            supported: true,
            spot_count: counts
                .iter()
                .find(|(name, _)| name == city)
                .map_or(0, |(_, n)| *n),
        })
        .collect();

    data.extend(
        counts
            .iter()
            .filter(|(name, _)| !is_supported_city(name))
            .map(|(name, n)| CityItem {
                name: (*name).to_string(),
                supported: false,
                spot_count: *n,
            }),
    );

    Json(ApiResponse::new(data, req_id.0))
}

pub(super) async fn list_city_areas(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(city): Path<String>,
) -> Json<ApiResponse<CityAreas>> {
    let areas = areas_for_city(state.catalog.spots(), &city);
    let supported = is_supported_city(&city);

    Json(ApiResponse::new(
        CityAreas {
            city,
            supported,
            areas,
        },
        req_id.0,
    ))
}
