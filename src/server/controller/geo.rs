use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ResponseDto, geo::GeoLocationDto},
    server::{error::AppError, service::geocode::GeocodeService, state::AppState},
};

/// Tag for grouping geocoding endpoints in OpenAPI documentation
pub static GEO_TAG: &str = "geo";

#[derive(Deserialize)]
pub struct ReverseGeocodeQuery {
    pub lat: f64,
    pub lng: f64,
}

/// Reverse-geocode a coordinate pair.
///
/// Best-effort: without a configured provider key, or on provider failure,
/// the result is empty strings rather than an error.
///
/// # Returns
/// - `200 OK` - Resolved city/country (possibly empty) in the success envelope
#[utoipa::path(
    get,
    path = "/api/geocode/reverse",
    tag = GEO_TAG,
    params(
        ("lat" = f64, Query, description = "Latitude"),
        ("lng" = f64, Query, description = "Longitude")
    ),
    responses(
        (status = 200, description = "Resolved place", body = GeoLocationDto)
    ),
)]
pub async fn reverse_geocode(
    State(state): State<AppState>,
    Query(query): Query<ReverseGeocodeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let location = GeocodeService::new(&state.http_client, state.opencage_api_key.as_deref())
        .reverse(query.lat, query.lng)
        .await;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::new(StatusCode::OK, location, "Location resolved")),
    ))
}
