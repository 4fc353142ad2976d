use folio_db::table::StatusCheck;
use sea_query::{Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::{SqlitePool, prelude::FromRow};

#[derive(Deserialize, Debug)]
pub struct StatusCheckInput {
    pub client_name: String,
}

#[derive(Serialize, FromRow, Debug, Clone, PartialEq)]
pub struct StatusCheckView {
    pub id: String,
    pub client_name: String,
    #[sqlx(rename = "created_at")]
    pub timestamp: i64,
}

pub async fn record(pool: &SqlitePool, input: StatusCheckInput) -> anyhow::Result<StatusCheckView> {
    let view = StatusCheckView {
        id: uuid::Uuid::new_v4().to_string(),
        client_name: input.client_name,
        timestamp: now_millis(),
    };

    let statement = Query::insert()
        .into_table(StatusCheck::Table)
        .columns([
            StatusCheck::Id,
            StatusCheck::ClientName,
            StatusCheck::CreatedAt,
        ])
        .values_panic([
            view.id.to_owned().into(),
            view.client_name.to_owned().into(),
            view.timestamp.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(view)
}

pub async fn list(pool: &SqlitePool) -> anyhow::Result<Vec<StatusCheckView>> {
    let statement = Query::select()
        .columns([
            StatusCheck::Id,
            StatusCheck::ClientName,
            StatusCheck::CreatedAt,
        ])
        .from(StatusCheck::Table)
        .order_by(StatusCheck::CreatedAt, Order::Asc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, StatusCheckView, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

fn now_millis() -> i64 {
    (time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}
