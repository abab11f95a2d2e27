use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use models::views::{RestaurantDetail, RestaurantSummary};
use service::restaurant_service;
use tracing::info;

use crate::{errors::ApiError, routes::ServerState};

/// A path id that is not an integer names no restaurant.
fn restaurant_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, ApiError> {
    path.map(|Path(id)| id).map_err(|_| ApiError::restaurant_not_found())
}

#[utoipa::path(
    get, path = "/restaurants", tag = "restaurants",
    responses(
        (status = 200, description = "Restaurant summaries", body = [crate::openapi::RestaurantDoc]),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<RestaurantSummary>>, ApiError> {
    let list = restaurant_service::list_restaurants(&state.db).await?;
    info!(count = list.len(), "list restaurants");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/restaurants/{id}", tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant ID")),
    responses(
        (status = 200, description = "Restaurant with its priced pizzas", body = crate::openapi::RestaurantDetailDoc),
        (status = 404, description = "Restaurant not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<RestaurantDetail>, ApiError> {
    let id = restaurant_id(path)?;
    Ok(Json(restaurant_service::get_restaurant_detail(&state.db, id).await?))
}

#[utoipa::path(
    delete, path = "/restaurants/{id}", tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant ID")),
    responses(
        (status = 204, description = "Deleted with its restaurant_pizzas"),
        (status = 404, description = "Restaurant not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = restaurant_id(path)?;
    restaurant_service::delete_restaurant(&state.db, id).await?;
    info!(id, "deleted restaurant");
    Ok(StatusCode::NO_CONTENT)
}
