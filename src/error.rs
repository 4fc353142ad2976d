use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use folio_shared::contact::ContactResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] folio_shared::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, message) = match self {
            AppError::Domain(folio_shared::Error::Validate(errors)) => {
                tracing::debug!(%errors, "Rejected invalid input");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    format!("Invalid input: {errors}"),
                )
            }
            AppError::Domain(folio_shared::Error::BadRequest(msg)) => (StatusCode::BAD_REQUEST, msg),
            AppError::Domain(e @ folio_shared::Error::NotFound(_)) => {
                (StatusCode::NOT_FOUND, e.to_string())
            }
            AppError::Domain(folio_shared::Error::Unknown(e)) | AppError::InternalError(e) => {
                tracing::error!("Internal error: {:?}", e);
                internal()
            }
            AppError::DatabaseError(e) => {
                tracing::error!("Database error: {:?}", e);
                internal()
            }
        };

        (status_code, Json(ContactResponse::rejected(message))).into_response()
    }
}

fn internal() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "An unexpected error occurred. Please try again later.".to_string(),
    )
}
