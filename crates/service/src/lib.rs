//! Service layer providing the restaurant/pizza operations on top of models.
//! - Every write runs in its own transaction, committed before returning.
//! - Reuses validation, entities and views from the `models` crate.

pub mod errors;
pub mod restaurant_service;
pub mod pizza_service;
pub mod restaurant_pizza_service;
pub mod seed;
#[cfg(test)]
pub mod test_support;
