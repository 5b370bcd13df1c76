use std::ops::Deref;

use laptop_review_db::table::Brand as BrandTable;
use laptop_review_shared::State;
use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Brand {
    pub id: i64,
    pub name: String,
}

#[derive(Deserialize, Validate)]
pub struct BrandInput {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

#[derive(Clone)]
pub struct Command(pub State);

impl Deref for Command {
    type Target = State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Command {
    pub async fn create(&self, input: BrandInput) -> laptop_review_shared::Result<Brand> {
        input.validate()?;

        let statement = Query::insert()
            .into_table(BrandTable::Table)
            .columns([BrandTable::Name])
            .values_panic([input.name.to_owned().into()])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        let id = result.last_insert_rowid();
        tracing::info!(brand_id = id, "brand created");

        Ok(Brand {
            id,
            name: input.name,
        })
    }

    pub async fn update(
        &self,
        id: i64,
        input: BrandInput,
    ) -> laptop_review_shared::Result<Brand> {
        input.validate()?;

        let statement = Query::update()
            .table(BrandTable::Table)
            .value(BrandTable::Name, input.name.to_owned())
            .and_where(Expr::col(BrandTable::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            laptop_review_shared::not_found!("brand not found");
        }

        Ok(Brand {
            id,
            name: input.name,
        })
    }

    /// Refused while any laptop row, soft-deleted or not, still references it.
    pub async fn delete(&self, id: i64) -> laptop_review_shared::Result<()> {
        let statement = Query::delete()
            .from_table(BrandTable::Table)
            .and_where(Expr::col(BrandTable::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = match sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await
        {
            Ok(result) => result,
            Err(err) if laptop_review_shared::is_foreign_key_violation(&err) => {
                laptop_review_shared::conflict!("brand is still referenced by laptops")
            }
            Err(err) => return Err(err.into()),
        };

        if result.rows_affected() == 0 {
            laptop_review_shared::not_found!("brand not found");
        }

        tracing::info!(brand_id = id, "brand deleted");

        Ok(())
    }

    pub async fn find(&self, id: i64) -> laptop_review_shared::Result<Option<Brand>> {
        let statement = Query::select()
            .columns([BrandTable::Id, BrandTable::Name])
            .from(BrandTable::Table)
            .and_where(Expr::col(BrandTable::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Brand, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }

    pub async fn list(&self) -> laptop_review_shared::Result<Vec<Brand>> {
        let statement = Query::select()
            .columns([BrandTable::Id, BrandTable::Name])
            .from(BrandTable::Table)
            .order_by(BrandTable::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Brand, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }
}
