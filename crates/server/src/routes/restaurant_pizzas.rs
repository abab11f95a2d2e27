use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use models::views::RestaurantPizzaView;
use service::restaurant_pizza_service::{self, NewRestaurantPizza};
use tracing::info;

use crate::{errors::ApiError, routes::ServerState};

#[utoipa::path(
    post, path = "/restaurant_pizzas", tag = "restaurant_pizzas",
    request_body = crate::openapi::CreateRestaurantPizzaDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::RestaurantPizzaDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ValidationErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<NewRestaurantPizza>, JsonRejection>,
) -> Result<(StatusCode, Json<RestaurantPizzaView>), ApiError> {
    // malformed bodies are validation failures like any other
    let Json(input) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;
    let created = restaurant_pizza_service::create_restaurant_pizza(&state.db, input).await?;
    info!(id = created.id, restaurant_id = created.restaurant_id, pizza_id = created.pizza_id, "created restaurant_pizza");
    Ok((StatusCode::CREATED, Json(created)))
}
