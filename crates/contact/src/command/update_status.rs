use folio_db::table::ContactMessage;
use folio_shared::contact::ContactStatus;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    pub async fn update_status(
        &self,
        id: impl Into<String>,
        status: ContactStatus,
    ) -> folio_shared::Result<()> {
        let id = id.into();
        let statement = Query::update()
            .table(ContactMessage::Table)
            .values([(ContactMessage::Status, status.to_string().into())])
            .and_where(Expr::col(ContactMessage::Id).eq(id.to_owned()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        if result.rows_affected() == 0 {
            folio_shared::not_found!("contact {id}");
        }

        tracing::info!(contact.id = %id, contact.status = %status, "contact status updated");

        Ok(())
    }
}
