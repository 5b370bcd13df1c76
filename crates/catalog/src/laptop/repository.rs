use laptop_review_db::table::Laptop as LaptopTable;
use sea_query::{Expr, ExprTrait, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqlitePool;

use super::{Laptop, LaptopInput};

fn select() -> SelectStatement {
    Query::select()
        .columns([
            LaptopTable::Id,
            LaptopTable::BrandId,
            LaptopTable::CategoryId,
            LaptopTable::Name,
            LaptopTable::ReleaseYear,
            LaptopTable::Spec,
            LaptopTable::Price,
            LaptopTable::CreatedAt,
            LaptopTable::UpdatedAt,
        ])
        .from(LaptopTable::Table)
        .and_where(Expr::col(LaptopTable::DeletedAt).is_null())
        .to_owned()
}

pub(super) async fn find(
    pool: &SqlitePool,
    id: i64,
) -> laptop_review_shared::Result<Option<Laptop>> {
    let statement = select()
        .and_where(Expr::col(LaptopTable::Id).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, Laptop, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(super) async fn list(pool: &SqlitePool) -> laptop_review_shared::Result<Vec<Laptop>> {
    let statement = select().order_by(LaptopTable::Id, Order::Asc).to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, Laptop, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

pub(super) async fn create(
    pool: &SqlitePool,
    input: &LaptopInput,
    now: i64,
) -> Result<i64, sqlx::Error> {
    let statement = Query::insert()
        .into_table(LaptopTable::Table)
        .columns([
            LaptopTable::BrandId,
            LaptopTable::CategoryId,
            LaptopTable::Name,
            LaptopTable::ReleaseYear,
            LaptopTable::Spec,
            LaptopTable::Price,
            LaptopTable::CreatedAt,
            LaptopTable::UpdatedAt,
        ])
        .values_panic([
            input.brand_id.into(),
            input.category_id.into(),
            input.name.to_owned().into(),
            input.release_year.into(),
            input.spec.to_owned().into(),
            input.price.into(),
            now.into(),
            now.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.last_insert_rowid())
}

pub(super) async fn update(
    pool: &SqlitePool,
    id: i64,
    input: &LaptopInput,
    now: i64,
) -> Result<u64, sqlx::Error> {
    let statement = Query::update()
        .table(LaptopTable::Table)
        .value(LaptopTable::BrandId, input.brand_id)
        .value(LaptopTable::CategoryId, input.category_id)
        .value(LaptopTable::Name, input.name.to_owned())
        .value(LaptopTable::ReleaseYear, input.release_year)
        .value(LaptopTable::Spec, input.spec.to_owned())
        .value(LaptopTable::Price, input.price)
        .value(LaptopTable::UpdatedAt, now)
        .and_where(Expr::col(LaptopTable::Id).eq(id))
        .and_where(Expr::col(LaptopTable::DeletedAt).is_null())
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.rows_affected())
}

pub(super) async fn soft_delete(
    pool: &SqlitePool,
    id: i64,
    now: i64,
) -> laptop_review_shared::Result<u64> {
    let statement = Query::update()
        .table(LaptopTable::Table)
        .value(LaptopTable::DeletedAt, now)
        .and_where(Expr::col(LaptopTable::Id).eq(id))
        .and_where(Expr::col(LaptopTable::DeletedAt).is_null())
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.rows_affected())
}
