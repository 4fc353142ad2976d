use folio_db::table::ContactMessage;
use folio_shared::contact::ContactStatus;
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;

#[derive(Debug, FromRow)]
pub struct ContactRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: sqlx::types::Text<ContactStatus>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: i64,
}

/// A stored message as exposed by the inbox endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ContactView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: ContactStatus,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub timestamp: i64,
}

impl From<ContactRow> for ContactView {
    fn from(row: ContactRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            subject: row.subject,
            message: row.message,
            status: row.status.0,
            ip_address: row.ip_address,
            user_agent: row.user_agent,
            timestamp: row.created_at,
        }
    }
}

fn select() -> sea_query::SelectStatement {
    sea_query::Query::select()
        .columns([
            ContactMessage::Id,
            ContactMessage::Name,
            ContactMessage::Email,
            ContactMessage::Subject,
            ContactMessage::Message,
            ContactMessage::Status,
            ContactMessage::IpAddress,
            ContactMessage::UserAgent,
            ContactMessage::CreatedAt,
        ])
        .from(ContactMessage::Table)
        .to_owned()
}

impl super::Query {
    /// All messages, newest first.
    pub async fn all(&self) -> anyhow::Result<Vec<ContactView>> {
        let statement = select()
            .order_by(ContactMessage::CreatedAt, Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, ContactRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(ContactView::from).collect())
    }

    pub async fn find(&self, id: impl Into<String>) -> anyhow::Result<Option<ContactView>> {
        let statement = select()
            .and_where(Expr::col(ContactMessage::Id).eq(id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, ContactRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?
            .map(ContactView::from))
    }
}
