use crate::Field;

/// Errors surfaced to the display layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown form field `{0}`")]
    InvalidField(String),

    #[error("required fields are empty: {}", list(.empty))]
    Validation { empty: Vec<Field> },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Why a dispatched submission failed. Never leaves the client: every
/// variant is logged and collapsed into `SubmissionStatus::Failure`.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("contact endpoint is not configured")]
    MissingEndpoint,

    #[error("transport failure: {0}")]
    Transport(anyhow::Error),

    #[error("server rejected the message with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

fn list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
