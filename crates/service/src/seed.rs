//! Demo data for local development.

use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, TransactionTrait};
use tracing::info;

use models::{pizza, restaurant, restaurant_pizza};
use crate::errors::ServiceError;

const RESTAURANTS: [(&str, &str); 3] = [
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: [(&str, &str); 3] = [
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (restaurant index, pizza index, price)
const PAIRINGS: [(usize, usize, i64); 3] = [(0, 0, 1), (1, 1, 4), (2, 2, 5)];

/// Insert the demo restaurants, pizzas and prices when no restaurant exists
/// yet. Returns whether anything was written.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<bool, ServiceError> {
    let existing = restaurant::Entity::find()
        .count(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if existing > 0 {
        info!(existing, "seed skipped; restaurants already present");
        return Ok(false);
    }

    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let mut restaurants = Vec::with_capacity(RESTAURANTS.len());
    for (name, address) in RESTAURANTS {
        restaurants.push(restaurant::create(&txn, name, address).await?);
    }
    let mut pizzas = Vec::with_capacity(PIZZAS.len());
    for (name, ingredients) in PIZZAS {
        pizzas.push(pizza::create(&txn, name, ingredients).await?);
    }
    for (r, p, price) in PAIRINGS {
        restaurant_pizza::create(&txn, price, restaurants[r].id, pizzas[p].id).await?;
    }
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    info!(restaurants = restaurants.len(), pizzas = pizzas.len(), "demo data seeded");
    Ok(true)
}
