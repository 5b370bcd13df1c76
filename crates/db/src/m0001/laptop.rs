use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, IndexCreateStatement, IndexDropStatement,
    Table, TableCreateStatement, TableDropStatement,
};

use crate::table::{Brand, Category, Laptop};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Laptop::Table)
        .col(
            ColumnDef::new(Laptop::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Laptop::BrandId).integer().not_null())
        .col(ColumnDef::new(Laptop::CategoryId).integer().not_null())
        .col(
            ColumnDef::new(Laptop::Name)
                .string()
                .not_null()
                .string_len(255),
        )
        .col(ColumnDef::new(Laptop::ReleaseYear).integer().not_null())
        .col(ColumnDef::new(Laptop::Spec).text().not_null())
        .col(ColumnDef::new(Laptop::Price).double().not_null())
        .col(ColumnDef::new(Laptop::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Laptop::UpdatedAt).big_integer().not_null())
        .col(ColumnDef::new(Laptop::DeletedAt).big_integer().null())
        .foreign_key(
            ForeignKey::create()
                .name("fk_laptop_brand")
                .from(Laptop::Table, Laptop::BrandId)
                .to(Brand::Table, Brand::Id)
                .on_delete(ForeignKeyAction::Restrict),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_laptop_category")
                .from(Laptop::Table, Laptop::CategoryId)
                .to(Category::Table, Category::Id)
                .on_delete(ForeignKeyAction::Restrict),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Laptop::Table).to_owned()
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

pub struct CreateBrandIdx;

fn create_brand_idx() -> IndexCreateStatement {
    Index::create()
        .name("idx_laptop_brand_id")
        .table(Laptop::Table)
        .col(Laptop::BrandId)
        .to_owned()
}

fn drop_brand_idx() -> IndexDropStatement {
    Index::drop().name("idx_laptop_brand_id").table(Laptop::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateBrandIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_brand_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_brand_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateCategoryIdx;

fn create_category_idx() -> IndexCreateStatement {
    Index::create()
        .name("idx_laptop_category_id")
        .table(Laptop::Table)
        .col(Laptop::CategoryId)
        .to_owned()
}

fn drop_category_idx() -> IndexDropStatement {
    Index::drop().name("idx_laptop_category_id").table(Laptop::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateCategoryIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_category_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_category_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
