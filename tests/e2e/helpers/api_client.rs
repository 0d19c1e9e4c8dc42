use anyhow::Result;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

pub struct TestClient {
    base_url: String,
    client: reqwest::Client,
}

impl TestClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.request::<()>(Method::GET, path, None).await
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<ApiResponse> {
        self.request(Method::POST, path, Some(body)).await
    }

    async fn request<T: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&T>,
    ) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.client.request(method, &url);

        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;

        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.to_string(), v.to_string())))
            .collect();
        let body_bytes = response.bytes().await?.to_vec();
        let body = if body_bytes.is_empty() {
            None
        } else {
            serde_json::from_slice(&body_bytes).ok()
        };

        Ok(ApiResponse {
            status,
            body,
            body_bytes,
            headers,
        })
    }
}

pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Option<Value>,
    pub body_bytes: Vec<u8>,
    pub headers: HashMap<String, String>,
}

impl ApiResponse {
    pub fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(
            self.status, expected,
            "Expected status {} but got {}. Body: {:?}",
            expected, self.status, self.body
        );
        self
    }

    /// Assert the request-error body shape: `{ "error": <message> }`
    pub fn assert_error(&self, expected_message: &str) -> &Self {
        let message = self
            .body
            .as_ref()
            .and_then(|b| b.get("error"))
            .and_then(|m| m.as_str())
            .expect("Missing error field in error response");

        assert_eq!(
            message, expected_message,
            "Expected error message '{}', but got '{}'",
            expected_message, message
        );
        self
    }

    /// Assert the fallback body shape: `{ "fallback": true, "text": <text> }`
    pub fn assert_fallback(&self, expected_text: &str) -> &Self {
        let body = self.body.as_ref().expect("Expected a JSON body");
        assert_eq!(
            body.get("fallback").and_then(Value::as_bool),
            Some(true),
            "Expected fallback flag in body: {:?}",
            body
        );
        assert_eq!(
            body.get("text").and_then(Value::as_str),
            Some(expected_text),
            "Fallback text mismatch in body: {:?}",
            body
        );
        self
    }

    pub fn header(&self, name: &str) -> Option<&String> {
        self.headers.get(name)
    }

    pub fn assert_header(&self, name: &str, value: &str) -> &Self {
        let actual = self
            .headers
            .get(name)
            .unwrap_or_else(|| panic!("Header '{}' not found", name));
        assert_eq!(actual, value, "Header '{}' value mismatch", name);
        self
    }
}
