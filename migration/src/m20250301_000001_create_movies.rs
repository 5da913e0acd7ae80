use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(pk_auto(Movies::Id))
                    .col(string_len(Movies::Name, 255))
                    .col(string(Movies::Date))
                    .col(double(Movies::Score))
                    .col(string_len(Movies::Genre, 255))
                    .col(text(Movies::Overview))
                    .col(text(Movies::Crew))
                    .col(string_len(Movies::OrigTitle, 255))
                    .col(string_len(Movies::Status, 50))
                    .col(string_len(Movies::OrigLang, 50))
                    .col(double(Movies::Budget))
                    .col(double(Movies::Revenue))
                    .col(string_len(Movies::Country, 3))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movies_name_date")
                    .table(Movies::Table)
                    .col(Movies::Name)
                    .col(Movies::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Movies::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Id,
    Name,
    Date,
    Score,
    Genre,
    Overview,
    Crew,
    OrigTitle,
    Status,
    OrigLang,
    Budget,
    Revenue,
    Country,
}
