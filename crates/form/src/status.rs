use folio_shared::contact::SUCCESS_MESSAGE;
use strum::Display;

pub const FAILURE_BANNER: &str = "Sorry, your message could not be sent. Please try again in a moment, or reach out directly by email or LinkedIn.";

#[derive(Display, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Failure,
}

impl SubmissionStatus {
    /// `Success` and `Failure` stay on screen until the next edit.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Failure)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Feedback shown above the form, if any.
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            Self::Success => Some(SUCCESS_MESSAGE),
            Self::Failure => Some(FAILURE_BANNER),
            Self::Idle | Self::Pending => None,
        }
    }
}
