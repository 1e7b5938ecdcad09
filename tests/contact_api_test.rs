// ============================================================================
// Contact API Tests
// ============================================================================
//
// End-to-end tests for POST /api/contact against fake Resend and reCAPTCHA
// upstreams.
//
// ============================================================================

use axum::http::StatusCode;
use serde_json::{Value, json};

mod test_utils;
use test_utils::{
    AppOptions, TEST_API_KEY, TEST_SECRET, UpstreamBehavior, rendered_ago, spawn_app,
    unreachable_url, valid_form,
};

fn with_field(
    mut form: Vec<(&'static str, String)>,
    key: &'static str,
    value: &str,
) -> Vec<(&'static str, String)> {
    form.retain(|(k, _)| *k != key);
    form.push((key, value.to_string()));
    form
}

async fn post_form(
    app: &test_utils::TestApp,
    form: &[(&'static str, String)],
) -> (reqwest::StatusCode, Value) {
    let response = app
        .client
        .post(app.url("/api/contact"))
        .form(form)
        .send()
        .await
        .unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

// ============================================================================
// Accepted submissions
// ============================================================================

#[tokio::test]
async fn test_valid_submission_is_relayed_once() {
    let app = spawn_app(AppOptions::default()).await;

    let (status, body) = post_form(&app, &valid_form()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], "email_test_1");

    let emails = app.upstreams.emails();
    assert_eq!(emails.len(), 1);
    assert_eq!(
        emails[0].authorization.as_deref(),
        Some(format!("Bearer {}", TEST_API_KEY).as_str())
    );
    assert_eq!(emails[0].body["reply_to"], "a@b.com");
    assert_eq!(emails[0].body["to"], json!(["owner@example.com"]));
    assert_eq!(emails[0].body["subject"], "Message from contact form");
    assert_eq!(emails[0].body["from"], "Contact Form <onboarding@resend.dev>");
    assert!(
        emails[0].body["text"]
            .as_str()
            .unwrap()
            .contains("Hello, interested in your work.")
    );
}

#[tokio::test]
async fn test_json_body_with_token_is_verified_then_relayed() {
    let app = spawn_app(AppOptions {
        recaptcha: true,
        ..Default::default()
    })
    .await;

    let response = app
        .client
        .post(app.url("/api/contact"))
        .json(&json!({
            "senderEmail": "a@b.com",
            "message": "Hello, interested in your work.",
            "company": "",
            "formStart": rendered_ago(10_000),
            "recaptchaToken": "token-abc"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let verifications = app.upstreams.verifications();
    assert_eq!(verifications.len(), 1);
    assert_eq!(verifications[0]["secret"], TEST_SECRET);
    assert_eq!(verifications[0]["response"], "token-abc");
    assert_eq!(app.upstreams.emails().len(), 1);
}

#[tokio::test]
async fn test_no_token_skips_verification() {
    let app = spawn_app(AppOptions {
        recaptcha: true,
        ..Default::default()
    })
    .await;

    let (status, _) = post_form(&app, &valid_form()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(app.upstreams.verifications().is_empty());
}

// ============================================================================
// Local rejections
// ============================================================================

#[tokio::test]
async fn test_honeypot_rejected() {
    let app = spawn_app(AppOptions::default()).await;

    let (status, body) = post_form(&app, &with_field(valid_form(), "company", "Acme Ltd")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Spam detected");
    assert!(app.upstreams.emails().is_empty());
}

#[tokio::test]
async fn test_fast_submission_rejected() {
    let app = spawn_app(AppOptions::default()).await;

    let form = with_field(valid_form(), "formStart", &rendered_ago(500));
    let (status, body) = post_form(&app, &form).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please take a moment before submitting.");
    assert!(app.upstreams.emails().is_empty());
}

#[tokio::test]
async fn test_denylisted_content_rejected() {
    let app = spawn_app(AppOptions::default()).await;

    let form = with_field(valid_form(), "message", "Cheap SEO services and backlinks!");
    let (status, body) = post_form(&app, &form).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Message flagged as spam.");
}

#[tokio::test]
async fn test_field_limits() {
    let app = spawn_app(AppOptions::default()).await;

    let sender = format!("{}@b.com", "a".repeat(495));
    assert_eq!(sender.chars().count(), 501);
    let (status, body) = post_form(&app, &with_field(valid_form(), "senderEmail", &sender)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid sender email");

    let (status, body) =
        post_form(&app, &with_field(valid_form(), "message", &"m".repeat(5001))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid message");

    let (status, _) =
        post_form(&app, &with_field(valid_form(), "message", &"m".repeat(5000))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_largest_valid_form_reaches_the_pipeline() {
    let app = spawn_app(AppOptions::default()).await;

    // Four-byte characters triple in size once percent-encoded
    let sender = "\u{1F600}".repeat(500);
    let message = "\u{1F600}".repeat(5000);
    let form = with_field(
        with_field(valid_form(), "senderEmail", &sender),
        "message",
        &message,
    );

    let (status, body) = post_form(&app, &form).await;
    assert_eq!(status, StatusCode::OK, "unexpected body: {}", body);

    let response = app
        .client
        .post(app.url("/api/contact"))
        .json(&json!({
            "senderEmail": sender,
            "message": message,
            "company": "",
            "formStart": rendered_ago(10_000)
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let emails = app.upstreams.emails();
    assert_eq!(emails.len(), 2);
    assert_eq!(emails[0].body["reply_to"], sender);
}

#[tokio::test]
async fn test_unsupported_content_type_rejected() {
    let app = spawn_app(AppOptions::default()).await;

    let response = app
        .client
        .post(app.url("/api/contact"))
        .header("content-type", "text/plain")
        .body("hello")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

// ============================================================================
// Bot-score verification
// ============================================================================

#[tokio::test]
async fn test_low_score_rejected() {
    let app = spawn_app(AppOptions {
        recaptcha: true,
        behavior: UpstreamBehavior {
            verify_reply: json!({ "success": true, "score": 0.3, "action": "contact_submit" }),
            ..Default::default()
        },
        ..Default::default()
    })
    .await;

    let form = with_field(valid_form(), "recaptchaToken", "token-abc");
    let (status, body) = post_form(&app, &form).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bot verification failed.");
    assert!(app.upstreams.emails().is_empty());
}

#[tokio::test]
async fn test_token_without_secret_is_server_misconfiguration() {
    let app = spawn_app(AppOptions::default()).await;

    let form = with_field(valid_form(), "recaptchaToken", "token-abc");
    let (status, body) = post_form(&app, &form).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Bot verification is not configured.");
    assert!(app.upstreams.emails().is_empty());
}

#[tokio::test]
async fn test_unreachable_verifier_fails_closed() {
    let app = spawn_app(AppOptions {
        recaptcha: true,
        verify_url_override: Some(unreachable_url().await),
        ..Default::default()
    })
    .await;

    let form = with_field(valid_form(), "recaptchaToken", "token-abc");
    let (status, body) = post_form(&app, &form).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Unable to verify submission. Please try again.");
    assert!(app.upstreams.emails().is_empty());
}

// ============================================================================
// Email provider failures
// ============================================================================

#[tokio::test]
async fn test_provider_error_message_is_passed_through() {
    let app = spawn_app(AppOptions {
        behavior: UpstreamBehavior {
            resend_status: StatusCode::FORBIDDEN,
            resend_body: json!({
                "statusCode": 403,
                "name": "validation_error",
                "message": "The example.com domain is not verified."
            }),
            ..Default::default()
        },
        ..Default::default()
    })
    .await;

    let (status, body) = post_form(&app, &valid_form()).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "The example.com domain is not verified.");
    assert_eq!(app.upstreams.emails().len(), 1);
}

#[tokio::test]
async fn test_unreadable_provider_error_falls_back_to_status() {
    let app = spawn_app(AppOptions {
        behavior: UpstreamBehavior {
            resend_status: StatusCode::INTERNAL_SERVER_ERROR,
            resend_body: json!("upstream exploded"),
            ..Default::default()
        },
        ..Default::default()
    })
    .await;

    let (status, body) = post_form(&app, &valid_form()).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Email provider returned HTTP 500");
}
