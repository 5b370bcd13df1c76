use laptop_review_db::table::User;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};

#[derive(FromRow)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub created_at: i64,
    pub updated_at: i64,
}

pub enum FindType {
    Id(i64),
    Username(String),
}

pub(crate) async fn find(
    pool: &SqlitePool,
    arg_type: FindType,
) -> laptop_review_shared::Result<Option<UserRow>> {
    let mut statement = Query::select()
        .columns([
            User::Id,
            User::Username,
            User::Email,
            User::Password,
            User::CreatedAt,
            User::UpdatedAt,
        ])
        .from(User::Table)
        .limit(1)
        .to_owned();

    match arg_type {
        FindType::Id(id) => statement.and_where(Expr::col(User::Id).eq(id)),
        FindType::Username(username) => {
            statement.and_where(Expr::col(User::Username).eq(username))
        }
    };

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, UserRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

/// Returns the new row id. Errors are left raw so callers can detect
/// unique violations.
pub(crate) async fn create(
    pool: &SqlitePool,
    username: String,
    email: String,
    password: String,
    now: i64,
) -> Result<i64, sqlx::Error> {
    let statement = Query::insert()
        .into_table(User::Table)
        .columns([
            User::Username,
            User::Email,
            User::Password,
            User::CreatedAt,
            User::UpdatedAt,
        ])
        .values_panic([
            username.into(),
            email.into(),
            password.into(),
            now.into(),
            now.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.last_insert_rowid())
}

pub(crate) async fn update_password(
    pool: &SqlitePool,
    id: i64,
    password: String,
    now: i64,
) -> laptop_review_shared::Result<u64> {
    let statement = Query::update()
        .table(User::Table)
        .value(User::Password, password)
        .value(User::UpdatedAt, now)
        .and_where(Expr::col(User::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.rows_affected())
}
