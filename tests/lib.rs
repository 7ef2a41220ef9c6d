//! Shared fixtures for the cardmark integration suites.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use cardmark_core::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Transport that replays one canned response and keeps every request it saw.
pub struct RecordingHttpClient {
    response: Result<HttpResponse, HttpError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingHttpClient {
    pub fn replying(response: Result<HttpResponse, HttpError>) -> Arc<Self> {
        Arc::new(Self {
            response,
            requests: Mutex::new(Vec::new()),
        })
    }

    /// A successful reply whose single candidate carries `parts` in order.
    pub fn with_text(parts: &[&str]) -> Arc<Self> {
        let parts = parts
            .iter()
            .map(|text| serde_json::json!({ "text": text }))
            .collect::<Vec<_>>();
        let body = serde_json::json!({
            "candidates": [{ "content": { "parts": parts, "role": "model" } }]
        });
        Self::replying(Ok(HttpResponse::ok_json(body.to_string())))
    }

    pub fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }
}

impl HttpClient for RecordingHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}
