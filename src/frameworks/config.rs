use std::{env, time::Duration};

use crate::use_cases::validate_guid::ProcessingDelay;

// Runtime constants for talking to App1 (not page concerns).

pub fn app1_validation_url() -> String {
    env::var("APP1_VALIDATION_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:5221/api/ValidateGuid".to_string())
}

pub fn app1_request_timeout() -> Duration {
    let millis = env::var("APP1_REQUEST_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(1500);
    Duration::from_millis(millis)
}

// Simulated local processing pause before each outbound call.
pub fn processing_delay() -> ProcessingDelay {
    let min = env::var("PROCESSING_DELAY_MIN_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(50);
    let max = env::var("PROCESSING_DELAY_MAX_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(100);

    ProcessingDelay {
        min: Duration::from_millis(min),
        max: Duration::from_millis(max.max(min)),
    }
}
