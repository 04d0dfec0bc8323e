use crate::dto::user_dto::UserUpdatePayload;
use crate::error::Result;
use crate::models::user::User;
use crate::services::api_client::ApiClient;

#[derive(Clone)]
pub struct UserService {
    api: ApiClient,
}

impl UserService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn list(&self, token: &str) -> Result<Vec<User>> {
        self.api.get("/admin/users/?limit=100", Some(token)).await
    }

    #[tracing::instrument(skip(self, token, payload))]
    pub async fn update(&self, id: i64, token: &str, payload: &UserUpdatePayload) -> Result<User> {
        let user = self
            .api
            .put_json(&format!("/admin/users/{}", id), Some(token), payload)
            .await?;
        tracing::info!(user_id = id, is_active = payload.is_active, is_admin = payload.is_admin, "user updated");
        Ok(user)
    }
}
