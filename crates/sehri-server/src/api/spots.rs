use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use sehri_core::{filter_spots, EmptyState, FilterSelection, SehriSpot};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Default, Deserialize)]
pub(super) struct SpotsQuery {
    pub city: Option<String>,
    pub search: Option<String>,
    pub area: Option<String>,
}

impl SpotsQuery {
    /// Blank parameters are treated as unset, matching an untouched form.
    fn into_selection(self) -> FilterSelection {
        let mut selection = FilterSelection::default();
        if let Some(city) = self.city.filter(|c| !c.is_empty()) {
            selection.selected_city = city;
        }
        selection.search_term = self.search.unwrap_or_default();
        selection.selected_area = self.area.filter(|a| !a.is_empty());
        selection
    }
}

#[derive(Debug, Serialize)]
pub(super) struct SpotList {
    pub city: String,
    pub total: usize,
    pub spots: Vec<SehriSpot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
}

pub(super) async fn list_spots(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<SpotsQuery>,
) -> Json<ApiResponse<SpotList>> {
    let selection = query.into_selection();
    let spots = filter_spots(state.catalog.spots(), &selection);
    let empty_state = spots
        .is_empty()
        .then(|| EmptyState::for_city(&selection.selected_city));

    tracing::debug!(
        city = %selection.selected_city,
        search = %selection.search_term,
        area = ?selection.selected_area,
        total = spots.len(),
        "filtered spots"
    );

    Json(ApiResponse::new(
        SpotList {
            city: selection.selected_city,
            total: spots.len(),
            spots: spots.into_iter().cloned().collect(),
            empty_state,
        },
        req_id.0,
    ))
}

pub(super) async fn get_spot(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<SehriSpot>>, ApiError> {
    let id: u32 = raw_id.parse().map_err(|_| {
        ApiError::new(
            req_id.0.clone(),
            "bad_request",
            format!("invalid spot id '{raw_id}'"),
        )
    })?;
    let spot = state
        .catalog
        .get(id)
        .cloned()
        .ok_or_else(|| {
            ApiError::new(req_id.0.clone(), "not_found", format!("spot {id} not found"))
        })?;

    Ok(Json(ApiResponse::new(spot, req_id.0)))
}
