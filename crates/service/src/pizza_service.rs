use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use models::{pizza, views::PizzaSummary};
use crate::errors::ServiceError;

/// Create a pizza.
pub async fn create_pizza(db: &DatabaseConnection, name: &str, ingredients: &str) -> Result<pizza::Model, ServiceError> {
    Ok(pizza::create(db, name, ingredients).await?)
}

/// All pizzas as summaries, ordered by id.
pub async fn list_pizzas(db: &DatabaseConnection) -> Result<Vec<PizzaSummary>, ServiceError> {
    let rows = pizza::Entity::find()
        .order_by_asc(pizza::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows.iter().map(PizzaSummary::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn list_is_stable_between_reads() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(list_pizzas(&db).await?.is_empty());

        create_pizza(&db, "Emma", "Dough, Tomato Sauce, Cheese").await?;
        create_pizza(&db, "Geri", "Dough, Tomato Sauce, Cheese, Pepperoni").await?;

        let first = list_pizzas(&db).await?;
        let second = list_pizzas(&db).await?;
        assert_eq!(first, second);
        assert_eq!(first.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(), vec!["Emma", "Geri"]);
        Ok(())
    }
}
