use serde_json::Value;

use super::{
    client::{failure_from_response, parse_success, ApiClient, ErrorEnvelope},
    types::{
        ApiError, LoginRequest, LoginResponse, RegisterRequest, LOGIN_ERROR_MESSAGE,
        REGISTER_ERROR_MESSAGE,
    },
};

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/login", base_url))
                    .json(request),
            )
            .await?;

        if response.status().is_success() {
            parse_success(response).await
        } else {
            Err(failure_from_response(response, ErrorEnvelope::Error, LOGIN_ERROR_MESSAGE).await)
        }
    }

    /// Creates an account. The created record is returned as sent by the
    /// server; callers only rely on the request having succeeded.
    pub async fn create_user(&self, request: &RegisterRequest) -> Result<Value, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/usuarios", base_url))
                    .json(request),
            )
            .await?;

        if response.status().is_success() {
            parse_success(response).await
        } else {
            Err(
                failure_from_response(response, ErrorEnvelope::Message, REGISTER_ERROR_MESSAGE)
                    .await,
            )
        }
    }
}
