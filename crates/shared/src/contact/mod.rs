//! Wire types shared by the contact endpoint and the form client.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Acknowledgement text of an accepted contact message, shown back to the
/// visitor as-is.
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

/// Body of `POST /api/contact`.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Acknowledgement returned by the contact endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ContactResponse {
    pub fn ok(message: impl Into<String>, id: impl Into<Option<String>>) -> Self {
        Self {
            success: true,
            message: message.into(),
            id: id.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            id: None,
        }
    }
}

#[derive(
    EnumString,
    Display,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Replied,
}
