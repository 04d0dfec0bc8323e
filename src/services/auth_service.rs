use crate::dto::auth_dto::{RegisterRequest, TokenRequest, TokenResponse};
use crate::error::Result;
use crate::models::user::User;
use crate::services::api_client::ApiClient;

#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Exchanges credentials for a bearer token. The backend expects the
    /// email in the `username` field of a form-urlencoded body.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse> {
        let form = TokenRequest {
            username: email,
            password,
        };
        self.api.post_form("/token", &form).await
    }

    #[tracing::instrument(skip(self, password))]
    pub async fn register(&self, email: &str, password: &str) -> Result<User> {
        let body = RegisterRequest { email, password };
        self.api.post_json("/users/", None, &body).await
    }
}
