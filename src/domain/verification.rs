// src/domain/verification.rs

use crate::errors::ServerError;
use std::fmt;
use std::str::FromStr;

/// Where a user's ID card is in the review process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerificationStatus {
    #[default]
    Pending,
    Uploaded,
    Verified,
    Rejected,
}

/// Something that happens to an ID card upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationEvent {
    Upload,
    Remove,
    Approve,
    Reject,
}

impl VerificationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            VerificationStatus::Pending => "pending",
            VerificationStatus::Uploaded => "uploaded",
            VerificationStatus::Verified => "verified",
            VerificationStatus::Rejected => "rejected",
        }
    }

    /// Badge text; nothing is shown while pending.
    pub fn badge_label(self) -> Option<&'static str> {
        match self {
            VerificationStatus::Pending => None,
            VerificationStatus::Uploaded => Some("Ready to Submit"),
            VerificationStatus::Verified => Some("Verified"),
            VerificationStatus::Rejected => Some("Rejected"),
        }
    }

    /// Whether the user may still withdraw the file.
    pub fn removable(self) -> bool {
        matches!(self, VerificationStatus::Pending | VerificationStatus::Uploaded)
    }

    pub fn apply(self, event: VerificationEvent) -> Result<Self, ServerError> {
        use VerificationEvent::*;
        use VerificationStatus::*;

        match (self, event) {
            (Pending | Uploaded | Rejected, Upload) => Ok(Uploaded),
            (Pending | Uploaded, Remove) => Ok(Pending),
            (Uploaded, Approve) => Ok(Verified),
            (Uploaded, Reject) => Ok(Rejected),
            (Verified, Upload) => Err(ServerError::BadRequest("ID card already verified".into())),
            (status, event) => Err(ServerError::BadRequest(format!(
                "cannot {event:?} an ID card that is {status}"
            ))),
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerificationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(VerificationStatus::Pending),
            "uploaded" => Ok(VerificationStatus::Uploaded),
            "verified" => Ok(VerificationStatus::Verified),
            "rejected" => Ok(VerificationStatus::Rejected),
            other => Err(format!("unknown verification status: {other}")),
        }
    }
}
