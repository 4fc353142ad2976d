use std::time::Duration;

use folio_shared::contact::ContactRequest;
use serde_json::{Map, Value};

use crate::{
    Begin, DispatchError, FormController, HttpTransport, RawResponse, Result, SubmissionStatus,
    Transport,
};

pub const CONTACT_PATH: &str = "/api/contact";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: Option<String>,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout: Duration::from_secs(10),
        }
    }
}

pub struct SubmissionClient<T = HttpTransport> {
    endpoint: Option<String>,
    transport: T,
}

impl SubmissionClient<HttpTransport> {
    pub fn new(config: ClientConfig) -> anyhow::Result<Self> {
        let transport = HttpTransport::new(config.timeout)?;

        Ok(Self::with_transport(config.endpoint, transport))
    }
}

impl<T: Transport> SubmissionClient<T> {
    pub fn with_transport(endpoint: Option<String>, transport: T) -> Self {
        let endpoint = endpoint
            .map(|e| e.trim().trim_end_matches('/').to_owned())
            .filter(|e| !e.is_empty());

        Self {
            endpoint,
            transport,
        }
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Submits the form's current values.
    ///
    /// Returns `Pending` without sending anything when a submission is
    /// already in flight, and a validation error when a field is empty.
    /// Every other outcome settles the form and is returned as its status.
    /// Dropping the future mid-flight settles the form to `Failure`.
    pub async fn submit(&self, form: &FormController) -> Result<SubmissionStatus> {
        let (fields, in_flight) = match form.begin()? {
            Begin::AlreadyPending => {
                tracing::debug!("submission already in flight");
                return Ok(SubmissionStatus::Pending);
            }
            Begin::Ready(fields, in_flight) => (fields, in_flight),
        };

        let status = match self.dispatch(fields.into()).await {
            Ok(()) => SubmissionStatus::Success,
            Err(err) => {
                tracing::warn!(error = %err, "contact submission failed");
                SubmissionStatus::Failure
            }
        };

        in_flight.settle(status);

        Ok(status)
    }

    async fn dispatch(&self, request: ContactRequest) -> std::result::Result<(), DispatchError> {
        let Some(endpoint) = self.endpoint.as_deref() else {
            return Err(DispatchError::MissingEndpoint);
        };

        let url = format!("{endpoint}{CONTACT_PATH}");
        let res = self
            .transport
            .post_json(&url, &request)
            .await
            .map_err(DispatchError::Transport)?;

        interpret(res)?;

        tracing::info!(url, "contact submission accepted");

        Ok(())
    }
}

/// Acknowledgements are JSON objects; any other JSON value is malformed.
fn ack(body: &str) -> serde_json::Result<Map<String, Value>> {
    serde_json::from_str(body)
}

fn ack_message(ack: &Map<String, Value>) -> Option<String> {
    ack.get("message").and_then(Value::as_str).map(str::to_owned)
}

fn interpret(res: RawResponse) -> std::result::Result<(), DispatchError> {
    if !res.is_success() {
        return Err(DispatchError::Rejected {
            status: res.status,
            message: ack(&res.body).ok().as_ref().and_then(ack_message),
        });
    }

    let ack = ack(&res.body)?;

    if ack.get("success") != Some(&Value::Bool(true)) {
        return Err(DispatchError::Rejected {
            status: res.status,
            message: ack_message(&ack),
        });
    }

    Ok(())
}
