use crate::frameworks::config;
use crate::interface_adapters::clients::app1::App1Client;
use crate::use_cases::Interaction;

/// Assembles an interaction wired to App1 from environment configuration.
///
/// Hosts call this once per page lifecycle; the client dependency stays
/// explicit so tests can substitute their own validator.
pub fn build_interaction() -> Result<Interaction<App1Client>, reqwest::Error> {
    let validation_url = config::app1_validation_url();
    let timeout = config::app1_request_timeout();
    let client = App1Client::new(validation_url.clone(), timeout)?;
    tracing::debug!(
        app1_validation_url = %validation_url,
        app1_request_timeout_ms = timeout.as_millis(),
        "App1 client configured"
    );

    Ok(Interaction::new(client, config::processing_delay()))
}
