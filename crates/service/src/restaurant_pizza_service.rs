use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use serde::Deserialize;
use serde_json::Number;
use tracing::{debug, instrument};

use models::{pizza, restaurant, restaurant_pizza, views::RestaurantPizzaView};
use crate::errors::ServiceError;

/// Request payload for a new priced pairing. Every field is optional at
/// the wire level so a missing one surfaces as a validation error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewRestaurantPizza {
    /// Any JSON number; `5` and `5.0` are the same price, `5.5` is rejected.
    pub price: Option<Number>,
    pub restaurant_id: Option<i32>,
    pub pizza_id: Option<i32>,
}

/// Validate and insert a restaurant_pizza, returning the full view with both
/// related summaries. Nothing is written unless every check passes.
#[instrument(skip(db))]
pub async fn create_restaurant_pizza(db: &DatabaseConnection, input: NewRestaurantPizza) -> Result<RestaurantPizzaView, ServiceError> {
    let (Some(price), Some(restaurant_id), Some(pizza_id)) = (input.price, input.restaurant_id, input.pizza_id) else {
        return Err(ServiceError::Validation("price, restaurant_id and pizza_id are required".into()));
    };
    let price = whole_price(&price)?;
    restaurant_pizza::validate_price(price)?;

    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    let Some(owner) = restaurant::Entity::find_by_id(restaurant_id)
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
    else {
        txn.rollback().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        return Err(ServiceError::Validation(format!("restaurant {restaurant_id} does not exist")));
    };
    let Some(dish) = pizza::Entity::find_by_id(pizza_id)
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
    else {
        txn.rollback().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        return Err(ServiceError::Validation(format!("pizza {pizza_id} does not exist")));
    };

    let created = restaurant_pizza::create(&txn, price, restaurant_id, pizza_id).await?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    debug!(id = created.id, restaurant_id, pizza_id, price = created.price, "restaurant_pizza_created");
    Ok(RestaurantPizzaView::full(&created, &dish, &owner))
}

/// Integral value of a JSON number. Floats must have no fractional part;
/// out-of-range magnitudes saturate and are caught by the range check.
fn whole_price(price: &Number) -> Result<i64, ServiceError> {
    if let Some(n) = price.as_i64() {
        return Ok(n);
    }
    match price.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 => Ok(f as i64),
        _ => Err(ServiceError::Validation(format!("price {price} is not a whole number"))),
    }
}
