//! HTTP handlers for resource allocation and map overlays

use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use chrono::Utc;
use shared::{
    flood_zones, resolve_disaster_type_param, resolve_location_param, FloodZone, ResourceQuery,
    ResourceResponse,
};

use crate::error::{AppError, AppResult};
use crate::services::ResourceService;

/// Look up resources for a disaster type
/// GET /api/resources?disasterType=&location=
///
/// Both parameters are optional and default to `flood` / `River Valley`.
pub async fn get_resources(
    query: Result<Query<ResourceQuery>, QueryRejection>,
) -> AppResult<Json<ResourceResponse>> {
    let Query(query) = query.map_err(|e| AppError::InvalidQuery(e.body_text()))?;
    let disaster_type = resolve_disaster_type_param(query.disaster_type.as_deref())?;
    let location = resolve_location_param(query.location.as_deref());

    let response = ResourceService::new().allocate(disaster_type, location, Utc::now());
    Ok(Json(response))
}

/// Static flood-prone zones for the dashboard map
/// GET /api/flood-zones
pub async fn get_flood_zones() -> Json<Vec<FloodZone>> {
    Json(flood_zones())
}
