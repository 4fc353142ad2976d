use std::{path::PathBuf, str::FromStr};

use folio_contact::{ClientInfo, Command, Query, SubmitFormInput};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub struct State {
    pub command: Command,
    pub query: Query,
}

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    folio_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    Ok(State {
        command: Command(pool.clone()),
        query: Query(pool),
    })
}

pub fn input(name: impl Into<String>) -> SubmitFormInput {
    let name = name.into();

    SubmitFormInput {
        email: format!("{name}@folio.localhost"),
        name,
        subject: "Collaboration".to_owned(),
        message: "Would love to talk about a project.".to_owned(),
    }
}

#[allow(dead_code)]
pub async fn create_submit(cmd: &Command, name: impl Into<String>) -> anyhow::Result<String> {
    let ids = create_submit_all(cmd, vec![name]).await?;

    Ok(ids.first().unwrap().to_owned())
}

#[allow(dead_code)]
pub async fn create_submit_all(
    cmd: &Command,
    names: impl IntoIterator<Item = impl Into<String>>,
) -> anyhow::Result<Vec<String>> {
    let mut ids = vec![];
    for name in names.into_iter() {
        let id = cmd.submit_form(input(name), ClientInfo::default()).await?;
        ids.push(id);
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    Ok(ids)
}
