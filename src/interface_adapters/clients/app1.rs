use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::ports::{GrantedSession, GuidValidator, ValidateGuidError};

// Outbound payload; field name fixed by the contract with App1.
#[derive(Debug, Serialize)]
struct ValidationRequest<'a> {
    #[serde(rename = "guidToValidate")]
    guid_to_validate: &'a str,
}

// App1's verdict. Session id and user name only carry meaning when
// `is_valid` is true; `message` only when it is false. Absent fields decode
// as empty strings and unknown fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidationResponse {
    is_valid: bool,
    #[serde(default)]
    app1_session_id: String,
    #[serde(default)]
    user_name: String,
    #[serde(default)]
    message: String,
}

// Thin reqwest client for App1's guid validation endpoint.
#[derive(Clone)]
pub struct App1Client {
    http: reqwest::Client,
    validation_url: String,
}

impl App1Client {
    pub fn new(
        validation_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_http(http, validation_url))
    }

    // Accepts a shared transport; the client never mutates it, so one
    // reqwest::Client can serve any number of interactions.
    pub fn with_http(http: reqwest::Client, validation_url: impl Into<String>) -> Self {
        Self {
            http,
            validation_url: validation_url.into(),
        }
    }
}

#[async_trait]
impl GuidValidator for App1Client {
    async fn validate_guid(&self, guid: &str) -> Result<GrantedSession, ValidateGuidError> {
        let response = self
            .http
            .post(&self.validation_url)
            .json(&ValidationRequest {
                guid_to_validate: guid,
            })
            .send()
            .await
            .map_err(|err| ValidateGuidError::Network {
                reason: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            // Keep whatever App1 put in the body as diagnostic text.
            let body = response.text().await.unwrap_or_default();
            return Err(ValidateGuidError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let verdict = response
            .json::<ValidationResponse>()
            .await
            .map_err(|err| ValidateGuidError::Other {
                reason: err.to_string(),
            })?;

        if verdict.is_valid {
            Ok(GrantedSession {
                session_id: verdict.app1_session_id,
                user_name: verdict.user_name,
            })
        } else {
            Err(ValidateGuidError::Rejected {
                message: verdict.message,
            })
        }
    }
}
