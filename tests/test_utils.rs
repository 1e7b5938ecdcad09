// ============================================================================
// Test Utilities
// ============================================================================
//
// Spawns the real router on an ephemeral port, wired to fake upstreams that
// stand in for Resend (`POST /emails`) and reCAPTCHA (`POST /siteverify`).
// The fakes record every request they receive.
//
// ============================================================================

#![allow(dead_code)]

use axum::{
    Form, Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
};
use portfolio_server::{Config, context::AppContext};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const TEST_API_KEY: &str = "re_test_key";
pub const TEST_SECRET: &str = "captcha_secret";
pub const TEST_SITE_KEY: &str = "captcha_site_key";

/// How the fake upstreams answer
#[derive(Clone)]
pub struct UpstreamBehavior {
    pub verify_reply: Value,
    pub resend_status: StatusCode,
    pub resend_body: Value,
}

impl Default for UpstreamBehavior {
    fn default() -> Self {
        Self {
            verify_reply: json!({ "success": true, "score": 0.9, "action": "contact_submit" }),
            resend_status: StatusCode::OK,
            resend_body: json!({ "id": "email_test_1" }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedEmail {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Default)]
struct Recorder {
    emails: Mutex<Vec<RecordedEmail>>,
    verifications: Mutex<Vec<HashMap<String, String>>>,
}

struct FakeState {
    behavior: UpstreamBehavior,
    recorder: Arc<Recorder>,
}

pub struct FakeUpstreams {
    pub base_url: String,
    recorder: Arc<Recorder>,
}

impl FakeUpstreams {
    pub fn emails(&self) -> Vec<RecordedEmail> {
        self.recorder.emails.lock().unwrap().clone()
    }

    pub fn verifications(&self) -> Vec<HashMap<String, String>> {
        self.recorder.verifications.lock().unwrap().clone()
    }
}

async fn fake_siteverify(
    State(state): State<Arc<FakeState>>,
    Form(params): Form<HashMap<String, String>>,
) -> Json<Value> {
    state.recorder.verifications.lock().unwrap().push(params);
    Json(state.behavior.verify_reply.clone())
}

async fn fake_send_email(
    State(state): State<Arc<FakeState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state
        .recorder
        .emails
        .lock()
        .unwrap()
        .push(RecordedEmail { authorization, body });

    (
        state.behavior.resend_status,
        Json(state.behavior.resend_body.clone()),
    )
}

pub async fn spawn_fake_upstreams(behavior: UpstreamBehavior) -> FakeUpstreams {
    let recorder = Arc::new(Recorder::default());
    let state = Arc::new(FakeState {
        behavior,
        recorder: recorder.clone(),
    });

    let app = Router::new()
        .route("/siteverify", post(fake_siteverify))
        .route("/emails", post(fake_send_email))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeUpstreams {
        base_url: format!("http://{}", address),
        recorder,
    }
}

/// Returns a URL on a port nothing is listening on
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/siteverify", address)
}

pub struct TestApp {
    pub address: String,
    pub upstreams: FakeUpstreams,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.address, path)
    }
}

#[derive(Default)]
pub struct AppOptions {
    pub behavior: UpstreamBehavior,
    /// Configure RECAPTCHA_SECRET_KEY / RECAPTCHA_SITE_KEY
    pub recaptcha: bool,
    /// Point siteverify somewhere unreachable
    pub verify_url_override: Option<String>,
}

pub async fn spawn_app(options: AppOptions) -> TestApp {
    let upstreams = spawn_fake_upstreams(options.behavior.clone()).await;

    let mut vars: HashMap<&str, String> = HashMap::new();
    vars.insert("RESEND_API_KEY", TEST_API_KEY.to_string());
    vars.insert("RESEND_API_URL", upstreams.base_url.clone());
    vars.insert("CONTACT_TO", "owner@example.com".to_string());
    vars.insert("OUTBOUND_TIMEOUT_SECS", "2".to_string());
    vars.insert("LOG_HASH_SALT", "test-salt".to_string());
    vars.insert(
        "RECAPTCHA_VERIFY_URL",
        options
            .verify_url_override
            .clone()
            .unwrap_or_else(|| format!("{}/siteverify", upstreams.base_url)),
    );
    if options.recaptcha {
        vars.insert("RECAPTCHA_SECRET_KEY", TEST_SECRET.to_string());
        vars.insert("RECAPTCHA_SITE_KEY", TEST_SITE_KEY.to_string());
    }

    let config = Config::from_lookup(|key: &str| vars.get(key).cloned())
        .expect("Failed to build test config");
    let app_context =
        AppContext::from_config(Arc::new(config)).expect("Failed to build app context");

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap().to_string();
    tokio::spawn(portfolio_server::serve(listener, app_context));

    TestApp {
        address,
        upstreams,
        client: reqwest::Client::new(),
    }
}

/// A submission that passes every check: rendered ten seconds ago
pub fn valid_form() -> Vec<(&'static str, String)> {
    vec![
        ("senderEmail", "a@b.com".to_string()),
        ("message", "Hello, interested in your work.".to_string()),
        ("company", String::new()),
        ("formStart", rendered_ago(10_000)),
    ]
}

pub fn rendered_ago(millis: i64) -> String {
    (chrono::Utc::now().timestamp_millis() - millis).to_string()
}
