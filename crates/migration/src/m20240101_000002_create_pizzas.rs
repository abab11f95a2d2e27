//! Create `pizzas` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pizzas::Table)
                    .if_not_exists()
                    .col(pk_auto(Pizzas::Id))
                    .col(string(Pizzas::Name))
                    .col(string(Pizzas::Ingredients))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Pizzas::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Pizzas {
    Table,
    Id,
    Name,
    Ingredients,
}
