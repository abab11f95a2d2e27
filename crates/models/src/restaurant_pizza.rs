use std::ops::RangeInclusive;

use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, pizza, restaurant};

/// Accepted price range, inclusive on both ends.
pub const PRICE_RANGE: RangeInclusive<i64> = 1..=30;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restaurant_pizzas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Restaurant,
    Pizza,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Restaurant => Entity::belongs_to(restaurant::Entity)
                .from(Column::RestaurantId)
                .to(restaurant::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::Pizza => Entity::belongs_to(pizza::Entity)
                .from(Column::PizzaId)
                .to(pizza::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<restaurant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Restaurant.def()
    }
}

impl Related<pizza::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pizza.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_price(price: i64) -> Result<i32, errors::ModelError> {
    if !PRICE_RANGE.contains(&price) {
        return Err(errors::ModelError::Validation(format!(
            "price must be between {} and {}",
            PRICE_RANGE.start(),
            PRICE_RANGE.end()
        )));
    }
    // in range, so it fits
    Ok(price as i32)
}

/// Insert a priced pairing after validating the price. Referenced rows are
/// the caller's (and the foreign keys') concern.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    price: i64,
    restaurant_id: i32,
    pizza_id: i32,
) -> Result<Model, errors::ModelError> {
    let price = validate_price(price)?;
    let am = ActiveModel {
        id: NotSet,
        price: Set(price),
        restaurant_id: Set(restaurant_id),
        pizza_id: Set(pizza_id),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(validate_price(1).unwrap(), 1);
        assert_eq!(validate_price(30).unwrap(), 30);
        assert_eq!(validate_price(17).unwrap(), 17);
    }

    #[test]
    fn out_of_range_rejected() {
        for bad in [0, 31, -5, i64::MAX, i64::MIN] {
            assert!(matches!(validate_price(bad), Err(errors::ModelError::Validation(_))), "{bad} accepted");
        }
    }
}
