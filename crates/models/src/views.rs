//! Serialized shapes returned over HTTP.
//!
//! Summary views carry only an entity's own columns. Association collections
//! appear only where a view adds them explicitly, and nested entities are
//! always rendered as summaries, so serialization never recurses.

use serde::Serialize;

use crate::{pizza, restaurant, restaurant_pizza};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestaurantSummary {
    pub id: i32,
    pub name: String,
    pub address: String,
}

impl From<&restaurant::Model> for RestaurantSummary {
    fn from(m: &restaurant::Model) -> Self {
        Self { id: m.id, name: m.name.clone(), address: m.address.clone() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PizzaSummary {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

impl From<&pizza::Model> for PizzaSummary {
    fn from(m: &pizza::Model) -> Self {
        Self { id: m.id, name: m.name.clone(), ingredients: m.ingredients.clone() }
    }
}

/// A priced pairing with its pizza, and its restaurant when rendered on its
/// own rather than inside a restaurant detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestaurantPizzaView {
    pub id: i32,
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
    pub pizza: PizzaSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<RestaurantSummary>,
}

impl RestaurantPizzaView {
    /// Entry of a restaurant's `restaurant_pizzas` list.
    pub fn nested(rp: &restaurant_pizza::Model, pizza: &pizza::Model) -> Self {
        Self {
            id: rp.id,
            price: rp.price,
            restaurant_id: rp.restaurant_id,
            pizza_id: rp.pizza_id,
            pizza: pizza.into(),
            restaurant: None,
        }
    }

    /// Standalone view with both sides of the association.
    pub fn full(rp: &restaurant_pizza::Model, pizza: &pizza::Model, restaurant: &restaurant::Model) -> Self {
        Self { restaurant: Some(restaurant.into()), ..Self::nested(rp, pizza) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestaurantDetail {
    #[serde(flatten)]
    pub restaurant: RestaurantSummary,
    pub restaurant_pizzas: Vec<RestaurantPizzaView>,
}

impl RestaurantDetail {
    pub fn new(restaurant: &restaurant::Model, restaurant_pizzas: Vec<RestaurantPizzaView>) -> Self {
        Self { restaurant: restaurant.into(), restaurant_pizzas }
    }
}
