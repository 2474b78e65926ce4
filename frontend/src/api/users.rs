use super::{
    client::{encode_path_segment, parse_success, ApiClient},
    types::{ApiError, UserRecord, USER_FETCH_ERROR_MESSAGE},
};

impl ApiClient {
    pub async fn get_user(&self, id: &str) -> Result<UserRecord, ApiError> {
        let base_url = self.resolved_base_url().await;
        let url = format!("{}/usuarios/{}", base_url, encode_path_segment(id));
        let response = self.send(self.http_client().get(&url)).await?;

        let status = response.status();
        if status.is_success() {
            parse_success(response).await
        } else {
            log::error!("GET {} answered {}", url, status);
            Err(ApiError::rejected(USER_FETCH_ERROR_MESSAGE))
        }
    }
}
