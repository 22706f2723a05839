use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recipe::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Recipe::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Recipe::Title).string_len(50).null())
                    .col(ColumnDef::new(Recipe::Description).string_len(300).null())
                    .col(ColumnDef::new(Recipe::Instructions).text().null())
                    .col(ColumnDef::new(Recipe::Category).string_len(50).null())
                    .col(ColumnDef::new(Recipe::Image).string_len(255).null())
                    .to_owned(),
            )
            .await?;

        // Category pages and the random-by-category lookup filter on this column
        manager
            .create_index(
                Index::create()
                    .name("idx_recipe_category")
                    .table(Recipe::Table)
                    .col(Recipe::Category)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Recipe::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Recipe {
    Table,
    Id,
    Title,
    Description,
    Instructions,
    Category,
    Image,
}
