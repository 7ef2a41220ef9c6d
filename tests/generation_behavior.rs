//! Behavior-driven tests for the text generation collaborator
//!
//! A recording transport stands in for the hosted model, so these tests pin
//! the request that leaves the process and how each failure surfaces.

use std::sync::Arc;

use cardmark_core::{
    render_document, DirectiveParser, GeminiGenerator, GenerationConfig, GenerationError,
    HttpError, HttpResponse, Registry, TextGenerator, Widget,
};
use cardmark_tests::RecordingHttpClient;
use serde_json::Value;

fn configured() -> GenerationConfig {
    GenerationConfig::default()
        .with_api_key("test-key")
        .with_timeout_ms(1_500)
}

fn generator(config: GenerationConfig, client: Arc<RecordingHttpClient>) -> GeminiGenerator {
    GeminiGenerator::with_http_client(config, &Registry::standard(), client)
}

// =============================================================================
// Drafting A Report
// =============================================================================

#[tokio::test]
async fn user_receives_model_markdown_that_renders_into_cards() {
    // Given: A model that answers with a report containing a card directive
    let client = RecordingHttpClient::with_text(&["# TSLA Outlook\n", "#card stockinfo TSLA\n"]);
    let generator = generator(configured(), client.clone());

    // When: The user asks for a report
    let markdown = generator
        .generate("Write a short TSLA report")
        .await
        .expect("generation should succeed");

    // Then: The parts are joined in order
    assert_eq!(markdown, "# TSLA Outlook\n#card stockinfo TSLA\n");

    // And: The draft renders with the standard registry
    let rendered = render_document(&markdown, &DirectiveParser::default(), &Registry::standard());
    assert!(matches!(rendered.widgets().next(), Some(Widget::StockInfo(_))));
}

#[tokio::test]
async fn request_carries_credential_instruction_and_prompt() {
    let client = RecordingHttpClient::with_text(&["ok"]);
    let generator = generator(configured(), client.clone());

    generator
        .generate("Summarize AAPL")
        .await
        .expect("generation should succeed");

    let requests = client.recorded_requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(
        request.url,
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
    );
    assert_eq!(
        request.headers.get("x-goog-api-key").map(String::as_str),
        Some("test-key")
    );
    assert_eq!(request.timeout_ms, 1_500);

    let body: Value =
        serde_json::from_str(request.body.as_deref().expect("json body")).expect("valid json");
    assert_eq!(body["contents"][0]["parts"][0]["text"], "Summarize AAPL");
    let instruction = body["systemInstruction"]["parts"][0]["text"]
        .as_str()
        .expect("instruction text");
    assert_eq!(instruction, generator.instruction());
    for descriptor in Registry::standard().iter() {
        assert!(instruction.contains(descriptor.usage));
    }
}

#[tokio::test]
async fn empty_candidate_list_yields_empty_text() {
    let client = RecordingHttpClient::replying(Ok(HttpResponse::ok_json(r#"{"candidates":[]}"#)));
    let text = generator(configured(), client)
        .generate("anything")
        .await
        .expect("generation should succeed");
    assert!(text.is_empty());
}

// =============================================================================
// Failures Stay Distinguishable
// =============================================================================

#[tokio::test]
async fn missing_credential_is_reported_before_any_request() {
    let client = RecordingHttpClient::with_text(&["unused"]);
    let config = GenerationConfig::from_lookup(|_| None);
    let err = generator(config, client.clone())
        .generate("Write a report")
        .await
        .expect_err("must fail without a key");

    assert_eq!(
        err,
        GenerationError::MissingCredential {
            variable: "API_KEY"
        }
    );
    assert!(client.recorded_requests().is_empty());
}

#[tokio::test]
async fn blank_prompt_is_rejected_locally() {
    let client = RecordingHttpClient::with_text(&["unused"]);
    let err = generator(configured(), client.clone())
        .generate("   ")
        .await
        .expect_err("must fail");
    assert_eq!(err, GenerationError::EmptyPrompt);
    assert!(client.recorded_requests().is_empty());
}

#[tokio::test]
async fn transport_failure_keeps_retryability() {
    let client = RecordingHttpClient::replying(Err(HttpError::new("connection failed")));
    let err = generator(configured(), client)
        .generate("Write a report")
        .await
        .expect_err("must fail");

    assert!(matches!(err, GenerationError::Transport { .. }));
    assert!(err.retryable());
    assert_eq!(err.code(), "generation.transport");
}

#[tokio::test]
async fn upstream_rejection_surfaces_status_and_message() {
    let client = RecordingHttpClient::replying(Ok(HttpResponse {
        status: 400,
        body: String::from(r#"{"error":{"code":400,"message":"API key not valid"}}"#),
    }));
    let err = generator(configured(), client)
        .generate("Write a report")
        .await
        .expect_err("must fail");

    assert_eq!(
        err,
        GenerationError::Status {
            status: 400,
            message: String::from("API key not valid"),
        }
    );
    assert!(!err.retryable());
}

#[tokio::test]
async fn unparseable_body_is_malformed_response() {
    let client = RecordingHttpClient::replying(Ok(HttpResponse::ok_json("<html>")));
    let err = generator(configured(), client)
        .generate("Write a report")
        .await
        .expect_err("must fail");
    assert!(matches!(err, GenerationError::MalformedResponse(_)));
}

#[test]
fn configuration_reads_overrides_from_environment_lookup() {
    let config = GenerationConfig::from_lookup(|name| match name {
        "API_KEY" => Some(String::from("abc")),
        "CARDMARK_MODEL" => Some(String::from("gemini-2.5-pro")),
        "CARDMARK_ENDPOINT" => Some(String::from("http://127.0.0.1:9000")),
        _ => None,
    });
    assert!(config.has_credential());
    assert_eq!(config.model, "gemini-2.5-pro");
    assert_eq!(config.endpoint, "http://127.0.0.1:9000");
    assert!(!format!("{config:?}").contains("abc"));
}
