use axum::{extract::State, Json};
use models::views::PizzaSummary;
use service::pizza_service;

use crate::{errors::ApiError, routes::ServerState};

#[utoipa::path(
    get, path = "/pizzas", tag = "pizzas",
    responses(
        (status = 200, description = "Pizza summaries", body = [crate::openapi::PizzaDoc]),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<PizzaSummary>>, ApiError> {
    Ok(Json(pizza_service::list_pizzas(&state.db).await?))
}
