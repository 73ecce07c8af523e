// Fake App1 bootstrap shared by the integration tests in this binary.
use std::{
    sync::{Arc, OnceLock},
    time::Duration,
};

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Deserialize;
use serde_json::json;

// Validation endpoint URL published once the server binds its port.
static APP1_URL: OnceLock<String> = OnceLock::new();
// One-time guard so the bootstrap path runs only once per test binary.
static APP1_READY: OnceLock<()> = OnceLock::new();

#[derive(Deserialize)]
struct ValidationRequest {
    #[serde(rename = "guidToValidate")]
    guid_to_validate: String,
}

// Scripted App1: the guid's suffix picks the verdict.
async fn validate_guid(Json(payload): Json<ValidationRequest>) -> Response {
    let guid = payload.guid_to_validate.as_str();
    if guid.ends_with("-expired") {
        return Json(json!({ "isValid": false, "message": "expired" })).into_response();
    }
    if guid.ends_with("-maintenance") {
        return (StatusCode::SERVICE_UNAVAILABLE, "maintenance").into_response();
    }
    Json(json!({
        "isValid": true,
        "app1SessionId": "sess-1",
        "userName": "alice",
        "message": ""
    }))
    .into_response()
}

// Ensure the fake App1 is running and return its validation endpoint URL.
pub fn ensure_app1() -> String {
    APP1_READY.get_or_init(|| {
        let published_url = Arc::new(OnceLock::<String>::new());
        let published_url_thread = Arc::clone(&published_url);
        // An OS thread so the server outlives individual `#[tokio::test]` runtimes.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                // Ephemeral port to avoid collisions with local services.
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                let _ = published_url_thread.set(format!("http://{addr}/api/ValidateGuid"));

                let app = Router::new().route("/api/ValidateGuid", post(validate_guid));
                axum::serve(listener, app).await.expect("fake App1 failed");
            });
        });
        wait_for_url_and_readiness(published_url);
    });

    APP1_URL
        .get()
        .expect("fake App1 url should be initialized")
        .clone()
}

// Wait for URL publication, then for the socket to accept TCP connections.
fn wait_for_url_and_readiness(published_url: Arc<OnceLock<String>>) {
    let url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };
    let _ = APP1_URL.set(url.clone());

    // host:port for raw TCP readiness probes.
    let addr = url
        .strip_prefix("http://")
        .and_then(|rest| rest.split('/').next())
        .expect("url should use http://");

    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("fake App1 did not become ready in time");
}
