use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, IndexCreateStatement, IndexDropStatement,
    Table, TableCreateStatement, TableDropStatement,
};

use crate::table::{Comment, Laptop, User};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Comment::Table)
        .col(
            ColumnDef::new(Comment::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Comment::UserId).integer().not_null())
        .col(ColumnDef::new(Comment::LaptopId).integer().not_null())
        .col(ColumnDef::new(Comment::Content).text().not_null())
        .col(ColumnDef::new(Comment::Rating).integer().not_null())
        .col(ColumnDef::new(Comment::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Comment::UpdatedAt).big_integer().not_null())
        .col(ColumnDef::new(Comment::DeletedAt).big_integer().null())
        .foreign_key(
            ForeignKey::create()
                .name("fk_comment_user")
                .from(Comment::Table, Comment::UserId)
                .to(User::Table, User::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_comment_laptop")
                .from(Comment::Table, Comment::LaptopId)
                .to(Laptop::Table, Laptop::Id)
                .on_delete(ForeignKeyAction::Restrict),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Comment::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateLaptopIdx;

fn create_laptop_idx() -> IndexCreateStatement {
    Index::create()
        .name("idx_comment_laptop_id")
        .table(Comment::Table)
        .col(Comment::LaptopId)
        .to_owned()
}

fn drop_laptop_idx() -> IndexDropStatement {
    Index::drop().name("idx_comment_laptop_id").table(Comment::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateLaptopIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_laptop_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_laptop_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
