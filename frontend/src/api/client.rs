use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Client, RequestBuilder, Response,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    api::types::{ApiError, PARSE_ERROR_MESSAGE},
    config,
};

const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    /// Sends the request with `Accept: application/json`, mapping transport
    /// failures to the connectivity error.
    pub(super) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        request
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                log::error!("Request failed: {}", e);
                ApiError::connection().with_details(Value::String(e.to_string()))
            })
    }
}

/// Field of a JSON failure body carrying the server message.
///
/// `/login` answers `{ "error": ... }` while `/usuarios` answers
/// `{ "message": ... }`; both are kept as the backend sends them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ErrorEnvelope {
    Error,
    Message,
}

impl ErrorEnvelope {
    fn field(self) -> &'static str {
        match self {
            ErrorEnvelope::Error => "error",
            ErrorEnvelope::Message => "message",
        }
    }
}

pub(super) fn encode_path_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

fn is_json_response(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.contains("application/json"))
        .unwrap_or(false)
}

/// Converts a non-success response into the user-facing error.
pub(super) async fn failure_from_response(
    response: Response,
    envelope: ErrorEnvelope,
    fallback: &str,
) -> ApiError {
    let status = response.status();
    let json = is_json_response(&response);
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            log::error!("Failed to read error body ({}): {}", status, e);
            return ApiError::connection();
        }
    };

    if !json {
        log::error!("Respuesta del servidor: {}", body);
        return ApiError::connection();
    }

    match serde_json::from_str::<Value>(&body) {
        Ok(payload) => {
            let message = extract_message(&payload, envelope).unwrap_or(fallback);
            ApiError::rejected(message).with_details(payload.clone())
        }
        Err(e) => {
            log::error!("Error al analizar JSON ({}): {}", status, e);
            log::error!("Respuesta del servidor: {}", body);
            ApiError::connection()
        }
    }
}

fn extract_message(payload: &Value, envelope: ErrorEnvelope) -> Option<&str> {
    payload
        .get(envelope.field())
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
}

pub(super) async fn parse_success<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response.text().await.map_err(|e| {
        log::error!("Failed to read response body: {}", e);
        ApiError::connection()
    })?;
    serde_json::from_str(&body).map_err(|e| {
        log::error!("Error al analizar JSON: {}", e);
        ApiError::parse(PARSE_ERROR_MESSAGE)
    })
}
