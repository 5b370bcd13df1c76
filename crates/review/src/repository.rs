use laptop_review_db::table::{Comment as CommentTable, Laptop, User};
use sea_query::{Expr, ExprTrait, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};

use crate::{Author, Comment, CommentInput, CommentWithAuthor, LaptopSummary};

pub(crate) enum Filter {
    All,
    Id(i64),
    Laptop(i64),
}

#[derive(FromRow)]
struct CommentAuthorRow {
    id: i64,
    user_id: i64,
    laptop_id: i64,
    content: String,
    rating: i64,
    created_at: i64,
    updated_at: i64,
    username: String,
    name: String,
}

impl From<CommentAuthorRow> for CommentWithAuthor {
    fn from(row: CommentAuthorRow) -> Self {
        Self {
            user: Author {
                id: row.user_id,
                username: row.username,
            },
            laptop: LaptopSummary {
                id: row.laptop_id,
                name: row.name,
            },
            comment: Comment {
                id: row.id,
                user_id: row.user_id,
                laptop_id: row.laptop_id,
                content: row.content,
                rating: row.rating,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
        }
    }
}

fn select() -> SelectStatement {
    Query::select()
        .columns([
            CommentTable::Id,
            CommentTable::UserId,
            CommentTable::LaptopId,
            CommentTable::Content,
            CommentTable::Rating,
            CommentTable::CreatedAt,
            CommentTable::UpdatedAt,
        ])
        .from(CommentTable::Table)
        .and_where(Expr::col(CommentTable::DeletedAt).is_null())
        .to_owned()
}

pub(crate) async fn find(
    pool: &SqlitePool,
    id: i64,
) -> laptop_review_shared::Result<Option<Comment>> {
    let statement = select()
        .and_where(Expr::col(CommentTable::Id).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, Comment, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn list_with_author(
    pool: &SqlitePool,
    filter: Filter,
) -> laptop_review_shared::Result<Vec<CommentWithAuthor>> {
    let mut statement = Query::select()
        .columns([
            (CommentTable::Table, CommentTable::Id),
            (CommentTable::Table, CommentTable::UserId),
            (CommentTable::Table, CommentTable::LaptopId),
            (CommentTable::Table, CommentTable::Content),
            (CommentTable::Table, CommentTable::Rating),
            (CommentTable::Table, CommentTable::CreatedAt),
            (CommentTable::Table, CommentTable::UpdatedAt),
        ])
        .column((User::Table, User::Username))
        .column((Laptop::Table, Laptop::Name))
        .from(CommentTable::Table)
        .inner_join(
            User::Table,
            Expr::col((User::Table, User::Id))
                .equals((CommentTable::Table, CommentTable::UserId)),
        )
        .inner_join(
            Laptop::Table,
            Expr::col((Laptop::Table, Laptop::Id))
                .equals((CommentTable::Table, CommentTable::LaptopId)),
        )
        .and_where(Expr::col((CommentTable::Table, CommentTable::DeletedAt)).is_null())
        .order_by((CommentTable::Table, CommentTable::Id), Order::Asc)
        .to_owned();

    match filter {
        Filter::All => {}
        Filter::Id(id) => {
            statement.and_where(Expr::col((CommentTable::Table, CommentTable::Id)).eq(id));
        }
        Filter::Laptop(laptop_id) => {
            statement.and_where(
                Expr::col((CommentTable::Table, CommentTable::LaptopId)).eq(laptop_id),
            );
        }
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let rows = sqlx::query_as_with::<_, CommentAuthorRow, _>(&sql, values)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(CommentWithAuthor::from).collect())
}

pub(crate) async fn find_with_author(
    pool: &SqlitePool,
    id: i64,
) -> laptop_review_shared::Result<Option<CommentWithAuthor>> {
    let rows = list_with_author(pool, Filter::Id(id)).await?;

    Ok(rows.into_iter().next())
}

/// True when the laptop exists and is not soft-deleted.
pub(crate) async fn laptop_exists(
    pool: &SqlitePool,
    laptop_id: i64,
) -> laptop_review_shared::Result<bool> {
    let statement = Query::select()
        .column(Laptop::Id)
        .from(Laptop::Table)
        .and_where(Expr::col(Laptop::Id).eq(laptop_id))
        .and_where(Expr::col(Laptop::DeletedAt).is_null())
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let row = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}

pub(crate) async fn create(
    pool: &SqlitePool,
    user_id: i64,
    input: &CommentInput,
    now: i64,
) -> Result<i64, sqlx::Error> {
    let statement = Query::insert()
        .into_table(CommentTable::Table)
        .columns([
            CommentTable::UserId,
            CommentTable::LaptopId,
            CommentTable::Content,
            CommentTable::Rating,
            CommentTable::CreatedAt,
            CommentTable::UpdatedAt,
        ])
        .values_panic([
            user_id.into(),
            input.laptop_id.into(),
            input.content.to_owned().into(),
            input.rating.into(),
            now.into(),
            now.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.last_insert_rowid())
}

pub(crate) async fn update(
    pool: &SqlitePool,
    id: i64,
    input: &CommentInput,
    now: i64,
) -> laptop_review_shared::Result<u64> {
    let statement = Query::update()
        .table(CommentTable::Table)
        .value(CommentTable::LaptopId, input.laptop_id)
        .value(CommentTable::Content, input.content.to_owned())
        .value(CommentTable::Rating, input.rating)
        .value(CommentTable::UpdatedAt, now)
        .and_where(Expr::col(CommentTable::Id).eq(id))
        .and_where(Expr::col(CommentTable::DeletedAt).is_null())
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.rows_affected())
}

pub(crate) async fn soft_delete(
    pool: &SqlitePool,
    id: i64,
    now: i64,
) -> laptop_review_shared::Result<u64> {
    let statement = Query::update()
        .table(CommentTable::Table)
        .value(CommentTable::DeletedAt, now)
        .and_where(Expr::col(CommentTable::Id).eq(id))
        .and_where(Expr::col(CommentTable::DeletedAt).is_null())
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.rows_affected())
}
