#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use folio_form::{Field, FormController, RawResponse, Transport};
use folio_shared::contact::ContactRequest;
use tokio::sync::Notify;

pub const ENDPOINT: &str = "http://portfolio.test";

#[derive(Clone)]
pub enum Reply {
    Respond(u16, String),
    Unreachable,
}

impl Reply {
    pub fn ok() -> Self {
        Self::Respond(200, r#"{"success":true,"message":"Thanks","id":"1"}"#.to_owned())
    }

    pub fn status(code: u16, body: &str) -> Self {
        Self::Respond(code, body.to_owned())
    }
}

#[derive(Default)]
pub struct Gate {
    pub started: Notify,
    pub release: Notify,
}

/// Records every outbound call and answers with a canned reply.
pub struct FakeTransport {
    reply: Reply,
    calls: AtomicUsize,
    requests: Mutex<Vec<(String, ContactRequest)>>,
    gate: Option<Arc<Gate>>,
}

impl FakeTransport {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            requests: Mutex::default(),
            gate: None,
        }
    }

    pub fn gated(reply: Reply, gate: Arc<Gate>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new(reply)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<(String, ContactRequest)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn post_json(&self, url: &str, body: &ContactRequest) -> anyhow::Result<RawResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((url.to_owned(), body.clone()));

        if let Some(gate) = &self.gate {
            gate.started.notify_one();
            gate.release.notified().await;
        }

        match &self.reply {
            Reply::Respond(status, body) => Ok(RawResponse {
                status: *status,
                body: body.clone(),
            }),
            Reply::Unreachable => anyhow::bail!("connection refused"),
        }
    }
}

pub fn filled_form() -> FormController {
    let form = FormController::new();
    form.set(Field::Name, "Jane");
    form.set(Field::Email, "jane@x.com");
    form.set(Field::Subject, "Hi");
    form.set(Field::Message, "Hello");
    form
}
