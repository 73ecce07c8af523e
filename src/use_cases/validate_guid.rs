use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::domain::ports::{GrantedSession, GuidValidator, ValidateGuidError};
use crate::domain::state::InteractionState;

/// Bounded artificial pause before the outbound call, standing in for local
/// processing latency. Cosmetic only; tests pass [`ProcessingDelay::NONE`].
#[derive(Clone, Copy, Debug)]
pub struct ProcessingDelay {
    pub min: Duration,
    pub max: Duration,
}

impl ProcessingDelay {
    pub const NONE: ProcessingDelay = ProcessingDelay {
        min: Duration::ZERO,
        max: Duration::ZERO,
    };

    async fn pause(&self) {
        let span = self.max.saturating_sub(self.min);
        if self.min.is_zero() && span.is_zero() {
            return;
        }

        // Nanosecond clock noise is enough spread for a cosmetic pause.
        let jitter = if span.is_zero() {
            Duration::ZERO
        } else {
            let nanos = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .subsec_nanos() as u128;
            Duration::from_millis((nanos % (span.as_millis() + 1)) as u64)
        };

        tokio::time::sleep(self.min + jitter).await;
    }
}

// Guid validation workflow with an injected validator port.
pub struct ValidateGuidUseCase<V> {
    pub validator: V,
    pub processing_delay: ProcessingDelay,
}

impl<V> ValidateGuidUseCase<V>
where
    V: GuidValidator,
{
    /// Runs one validation round-trip against App1 and writes the outcome
    /// into `state`.
    ///
    /// The counter tracks attempts, not successes: it is bumped once per
    /// dispatched call, whatever the result, and left alone when the empty
    /// guid precondition skips the call. The loading flag is cleared on
    /// every exit path.
    pub async fn execute(&self, state: &mut InteractionState) {
        state.loading = true;
        state.reset_outcome();

        self.processing_delay.pause().await;

        if state.received_guid.is_empty() {
            state.status = "Cannot validate: No GUID available.".to_string();
            state.content =
                "Please access App2 through App1 to receive an authentication GUID.".to_string();
            state.loading = false;
            return;
        }

        tracing::debug!(guid = %state.received_guid, "validating guid with App1");
        let outcome = self.validator.validate_guid(&state.received_guid).await;
        state.call_count += 1;

        match outcome {
            Ok(GrantedSession {
                session_id,
                user_name,
            }) => {
                state.status =
                    format!("Callback received from App1: valid. App1 session id: {session_id}.");
                state.content = format!("GIS content displayed for {user_name}. (Re-validated via App1)");
                state.app1_session_id = session_id;
                state.user_name = user_name;
            }
            Err(ValidateGuidError::Rejected { message }) => {
                state.status = format!("Callback received from App1: invalid. Message: {message}");
                state.content = "Could not display GIS content. Validation failed with App1.".to_string();
            }
            Err(ValidateGuidError::Upstream { status, body }) => {
                state.status = format!("App1 API returned status {status}. Details: {body}");
                state.content = "Failed to communicate with App1 for validation.".to_string();
            }
            Err(ValidateGuidError::Network { reason }) => {
                tracing::warn!(reason = %reason, "App1 unreachable");
                state.status =
                    format!("Network error: could not connect to App1. Is App1 running? {reason}");
                state.content = "Failed to connect to App1 for validation. Check App1 status.".to_string();
            }
            Err(ValidateGuidError::Other { reason }) => {
                state.status = format!("An unexpected error occurred: {reason}");
                state.content = "An unexpected error occurred during validation.".to_string();
            }
        }

        state.loading = false;
    }
}
