use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait};
use tracing::{info, instrument};

use models::{
    pizza, restaurant, restaurant_pizza,
    views::{RestaurantDetail, RestaurantPizzaView, RestaurantSummary},
};
use crate::errors::ServiceError;

/// Create a restaurant.
pub async fn create_restaurant(db: &DatabaseConnection, name: &str, address: &str) -> Result<restaurant::Model, ServiceError> {
    let created = restaurant::create(db, name, address).await?;
    Ok(created)
}

/// All restaurants as summaries, ordered by id.
pub async fn list_restaurants(db: &DatabaseConnection) -> Result<Vec<RestaurantSummary>, ServiceError> {
    let rows = restaurant::Entity::find()
        .order_by_asc(restaurant::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows.iter().map(RestaurantSummary::from).collect())
}

/// Restaurant with its priced pizzas; `NotFound` if absent.
pub async fn get_restaurant_detail(db: &DatabaseConnection, id: i32) -> Result<RestaurantDetail, ServiceError> {
    let Some(found) = restaurant::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
    else {
        return Err(ServiceError::not_found("Restaurant"));
    };

    let rows = restaurant_pizza::Entity::find()
        .filter(restaurant_pizza::Column::RestaurantId.eq(id))
        .order_by_asc(restaurant_pizza::Column::Id)
        .find_also_related(pizza::Entity)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;

    let pairings = rows
        .iter()
        .map(|(rp, p)| match p {
            Some(p) => Ok(RestaurantPizzaView::nested(rp, p)),
            None => Err(ServiceError::Db(format!(
                "restaurant_pizza {} references missing pizza {}",
                rp.id, rp.pizza_id
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RestaurantDetail::new(&found, pairings))
}

/// Delete a restaurant together with its restaurant_pizzas in one
/// transaction; `NotFound` if it did not exist.
#[instrument(skip(db))]
pub async fn delete_restaurant(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    let found = restaurant::Entity::find_by_id(id)
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if found.is_none() {
        txn.rollback().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        return Err(ServiceError::not_found("Restaurant"));
    }

    let pairings = restaurant_pizza::Entity::delete_many()
        .filter(restaurant_pizza::Column::RestaurantId.eq(id))
        .exec(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    restaurant::Entity::delete_by_id(id)
        .exec(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;

    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(restaurant_id = id, restaurant_pizzas = pairings.rows_affected, "restaurant_deleted");
    Ok(())
}
