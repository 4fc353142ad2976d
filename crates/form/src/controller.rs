use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, Field, FormFields, Result, SubmissionStatus};

#[derive(Default, Debug)]
struct FormState {
    fields: FormFields,
    status: SubmissionStatus,
}

pub(crate) enum Begin {
    AlreadyPending,
    Ready(FormFields, InFlight),
}

/// Owns the `Pending` status of one accepted submission. Dropping it
/// unsettled, e.g. when the submit future is cancelled, resolves the form to
/// `Failure` so it can be submitted again.
pub(crate) struct InFlight {
    form: FormController,
    settled: bool,
}

impl InFlight {
    pub(crate) fn settle(mut self, status: SubmissionStatus) {
        self.form.settle(status);
        self.settled = true;
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if !self.settled {
            tracing::warn!("submission dropped before completing");
            self.form.settle(SubmissionStatus::Failure);
        }
    }
}

/// Shared handle over one mounted contact form.
///
/// Clones observe and mutate the same state, so the display layer can keep
/// editing while a submission is in flight.
#[derive(Clone, Default, Debug)]
pub struct FormController {
    state: Arc<Mutex<FormState>>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Overwrites the field named `name`. An edit made while a banner is
    /// displayed dismisses it.
    pub fn update_field(&self, name: &str, value: impl Into<String>) -> Result<()> {
        let field = Field::from_str(name).map_err(|_| Error::InvalidField(name.to_owned()))?;
        self.set(field, value);

        Ok(())
    }

    pub fn set(&self, field: Field, value: impl Into<String>) {
        let mut state = self.lock();
        *state.fields.slot(field) = value.into();

        if state.status.is_terminal() {
            state.status = SubmissionStatus::Idle;
        }
    }

    pub fn reset(&self) {
        self.lock().fields = FormFields::default();
    }

    pub fn snapshot(&self) -> FormFields {
        self.lock().fields.clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.lock().status
    }

    /// Checks the pending guard and validates under a single lock, moving to
    /// `Pending` only when the snapshot is complete.
    pub(crate) fn begin(&self) -> Result<Begin> {
        let mut state = self.lock();

        if state.status.is_pending() {
            return Ok(Begin::AlreadyPending);
        }

        let empty = state.fields.empty_fields();
        if !empty.is_empty() {
            return Err(Error::Validation { empty });
        }

        state.status = SubmissionStatus::Pending;

        let in_flight = InFlight {
            form: self.clone(),
            settled: false,
        };

        Ok(Begin::Ready(state.fields.clone(), in_flight))
    }

    fn settle(&self, status: SubmissionStatus) {
        let mut state = self.lock();
        if status == SubmissionStatus::Success {
            state.fields = FormFields::default();
        }
        state.status = status;
    }
}
