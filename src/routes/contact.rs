use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::HeaderMap,
};
use folio_contact::{ClientInfo, ContactView};
use folio_shared::contact::{ContactRequest, ContactResponse, ContactStatus, SUCCESS_MESSAGE};
use serde::Deserialize;

use crate::{error::AppResult, routes::AppState};

fn client_info(headers: &HeaderMap) -> ClientInfo {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    };

    ClientInfo {
        ip_address: header("x-forwarded-for")
            .and_then(|value| value.split(',').next().map(|ip| ip.trim().to_owned()))
            .filter(|ip| !ip.is_empty()),
        user_agent: header("user-agent"),
    }
}

/// POST /api/contact
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<ContactRequest>,
) -> AppResult<Json<ContactResponse>> {
    let id = state
        .command
        .submit_form(input.into(), client_info(&headers))
        .await?;

    Ok(Json(ContactResponse::ok(SUCCESS_MESSAGE, id)))
}

pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ContactView>>> {
    Ok(Json(state.query.all().await?))
}

pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ContactView>> {
    match state.query.find(&id).await? {
        Some(contact) => Ok(Json(contact)),
        None => Err(folio_shared::Error::NotFound(format!("contact {id}")).into()),
    }
}

#[derive(Deserialize)]
pub struct StatusParams {
    #[serde(default)]
    pub status: String,
}

/// PATCH /api/contacts/{id}/status?status=read
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<StatusParams>,
) -> AppResult<Json<ContactResponse>> {
    let Ok(status) = ContactStatus::from_str(&params.status) else {
        return Err(folio_shared::Error::BadRequest(format!(
            "invalid status `{}`, expected one of new, read, replied",
            params.status
        ))
        .into());
    };

    state.command.update_status(&id, status).await?;

    Ok(Json(ContactResponse::ok(
        format!("Status updated to {status}"),
        None::<String>,
    )))
}
