use std::ops::Deref;

use laptop_review_db::table::Category as CategoryTable;
use laptop_review_shared::State;
use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Deserialize, Validate)]
pub struct CategoryInput {
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
    pub async fn create(&self, input: CategoryInput) -> laptop_review_shared::Result<Category> {
        input.validate()?;

        let statement = Query::insert()
            .into_table(CategoryTable::Table)
            .columns([CategoryTable::Name])
            .values_panic([input.name.to_owned().into()])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        let id = result.last_insert_rowid();
        tracing::info!(category_id = id, "category created");

        Ok(Category {
            id,
            name: input.name,
        })
    }

    pub async fn update(
        &self,
        id: i64,
        input: CategoryInput,
    ) -> laptop_review_shared::Result<Category> {
        input.validate()?;

        let statement = Query::update()
            .table(CategoryTable::Table)
            .value(CategoryTable::Name, input.name.to_owned())
            .and_where(Expr::col(CategoryTable::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            laptop_review_shared::not_found!("category not found");
        }

        Ok(Category {
            id,
            name: input.name,
        })
    }

    /// Refused while any laptop row, soft-deleted or not, still references it.
    pub async fn delete(&self, id: i64) -> laptop_review_shared::Result<()> {
        let statement = Query::delete()
            .from_table(CategoryTable::Table)
            .and_where(Expr::col(CategoryTable::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = match sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await
        {
            Ok(result) => result,
            Err(err) if laptop_review_shared::is_foreign_key_violation(&err) => {
                laptop_review_shared::conflict!("category is still referenced by laptops")
            }
            Err(err) => return Err(err.into()),
        };

        if result.rows_affected() == 0 {
            laptop_review_shared::not_found!("category not found");
        }

        tracing::info!(category_id = id, "category deleted");

        Ok(())
    }

    pub async fn find(&self, id: i64) -> laptop_review_shared::Result<Option<Category>> {
        let statement = Query::select()
            .columns([CategoryTable::Id, CategoryTable::Name])
            .from(CategoryTable::Table)
            .and_where(Expr::col(CategoryTable::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Category, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }

    pub async fn list(&self) -> laptop_review_shared::Result<Vec<Category>> {
        let statement = Query::select()
            .columns([CategoryTable::Id, CategoryTable::Name])
            .from(CategoryTable::Table)
            .order_by(CategoryTable::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Category, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }
}
