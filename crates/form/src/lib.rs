//! Client side of the portfolio contact form.
//!
//! [`FormController`] owns the typed-in fields and the lifecycle of the last
//! submission attempt. [`SubmissionClient`] snapshots a controller, posts the
//! snapshot to `{endpoint}/api/contact` and settles the controller into
//! [`SubmissionStatus::Success`] or [`SubmissionStatus::Failure`].
//!
//! ```text
//! Idle --submit--> Pending --ok--> Success --edit--> Idle
//!                  Pending --error--> Failure --edit--> Idle
//! ```

mod client;
mod controller;
mod error;
mod field;
mod status;
mod transport;

pub use client::*;
pub use controller::*;
pub use error::*;
pub use field::*;
pub use status::*;
pub use transport::*;
