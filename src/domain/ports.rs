use async_trait::async_trait;
use std::fmt;

// Identity granted by App1 when a guid checks out.
#[derive(Clone, Debug, PartialEq)]
pub struct GrantedSession {
    pub session_id: String,
    pub user_name: String,
}

// Classified outcome of one failed validation round-trip.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidateGuidError {
    // App1 answered but rejected the guid.
    Rejected { message: String },
    // App1 answered with a non-success status; body kept as diagnostic text.
    Upstream { status: u16, body: String },
    // The request never completed (refused connection, timeout, DNS).
    Network { reason: String },
    // Anything else that broke the attempt, such as an undecodable body.
    Other { reason: String },
}

impl fmt::Display for ValidateGuidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidateGuidError::Rejected { message } => {
                write!(f, "guid rejected by App1: {message}")
            }
            ValidateGuidError::Upstream { status, body } => {
                write!(f, "App1 returned status {status}: {body}")
            }
            ValidateGuidError::Network { reason } => {
                write!(f, "could not reach App1: {reason}")
            }
            ValidateGuidError::Other { reason } => {
                write!(f, "validation attempt failed: {reason}")
            }
        }
    }
}

impl std::error::Error for ValidateGuidError {}

// The use case depends on this trait, not the concrete reqwest client.
#[async_trait]
pub trait GuidValidator: Send + Sync {
    async fn validate_guid(&self, guid: &str) -> Result<GrantedSession, ValidateGuidError>;
}
