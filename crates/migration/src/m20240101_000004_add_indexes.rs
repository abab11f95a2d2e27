use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Detail view and cascade delete look up by restaurant
        manager
            .create_index(
                Index::create()
                    .name("idx_restaurant_pizzas_restaurant")
                    .table(RestaurantPizzas::Table)
                    .col(RestaurantPizzas::RestaurantId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_restaurant_pizzas_pizza")
                    .table(RestaurantPizzas::Table)
                    .col(RestaurantPizzas::PizzaId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_restaurant_pizzas_pizza").table(RestaurantPizzas::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_restaurant_pizzas_restaurant").table(RestaurantPizzas::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum RestaurantPizzas { Table, RestaurantId, PizzaId }
