use laptop_review_db::table::Profile as ProfileTable;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqlitePool;

use super::Profile;

pub(super) async fn find_by_user(
    pool: &SqlitePool,
    user_id: i64,
) -> laptop_review_shared::Result<Option<Profile>> {
    let statement = Query::select()
        .columns([
            ProfileTable::Id,
            ProfileTable::UserId,
            ProfileTable::Fullname,
            ProfileTable::Bio,
            ProfileTable::CreatedAt,
            ProfileTable::UpdatedAt,
        ])
        .from(ProfileTable::Table)
        .and_where(Expr::col(ProfileTable::UserId).eq(user_id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, Profile, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(super) async fn create(
    pool: &SqlitePool,
    user_id: i64,
    fullname: String,
    bio: String,
    now: i64,
) -> Result<i64, sqlx::Error> {
    let statement = Query::insert()
        .into_table(ProfileTable::Table)
        .columns([
            ProfileTable::UserId,
            ProfileTable::Fullname,
            ProfileTable::Bio,
            ProfileTable::CreatedAt,
            ProfileTable::UpdatedAt,
        ])
        .values_panic([
            user_id.into(),
            fullname.into(),
            bio.into(),
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
    user_id: i64,
    fullname: String,
    bio: String,
    now: i64,
) -> laptop_review_shared::Result<u64> {
    let statement = Query::update()
        .table(ProfileTable::Table)
        .value(ProfileTable::Fullname, fullname)
        .value(ProfileTable::Bio, bio)
        .value(ProfileTable::UpdatedAt, now)
        .and_where(Expr::col(ProfileTable::UserId).eq(user_id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.rows_affected())
}
