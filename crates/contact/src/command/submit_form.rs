use std::sync::LazyLock;

use folio_db::table::ContactMessage;
use folio_shared::contact::{ContactRequest, ContactStatus};
use regex::Regex;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

use crate::sanitize;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

#[derive(Validate, Debug)]
pub struct SubmitFormInput {
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    #[validate(length(min = 5, max = 200), regex(path = *EMAIL))]
    pub email: String,
    #[validate(length(min = 5, max = 200))]
    pub subject: String,
    #[validate(length(min = 10, max = 2000))]
    pub message: String,
}

impl From<ContactRequest> for SubmitFormInput {
    fn from(value: ContactRequest) -> Self {
        Self {
            name: sanitize(&value.name),
            email: sanitize(&value.email),
            subject: sanitize(&value.subject),
            message: sanitize(&value.message),
        }
    }
}

/// Request metadata stored alongside a message.
#[derive(Default, Debug, Clone)]
pub struct ClientInfo {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl super::Command {
    pub async fn submit_form(
        &self,
        input: SubmitFormInput,
        client: ClientInfo,
    ) -> folio_shared::Result<String> {
        input.validate()?;

        let id = uuid::Uuid::new_v4().to_string();
        let statement = Query::insert()
            .into_table(ContactMessage::Table)
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
            .values_panic([
                id.to_owned().into(),
                input.name.into(),
                input.email.into(),
                input.subject.into(),
                input.message.into(),
                ContactStatus::New.to_string().into(),
                client.ip_address.into(),
                client.user_agent.into(),
                crate::now_millis().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        tracing::info!(contact.id = %id, "contact message stored");

        Ok(id)
    }
}
