/// Authentication endpoints

use async_trait::async_trait;
use stunting_common::types::{
    LoginRequest, LoginResponse, ProfileData, RegisterRequest, UserProfile,
};
use stunting_common::Result;

use super::client::ApiClient;
use crate::auth::{AuthApi, ProfileVerifier};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const PROFILE_PATH: &str = "/api/auth/profile";

/// [`AuthApi`] over HTTP
#[derive(Debug, Clone, Default)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn client(&self) -> ApiClient {
        ApiClient::new(self.base_url.clone())
    }
}

#[async_trait(?Send)]
impl ProfileVerifier for HttpAuthApi {
    async fn verify(&self, token: &str) -> Result<UserProfile> {
        let profile: ProfileData = self.client().with_token(token).get(PROFILE_PATH).await?;
        Ok(profile.into())
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<String> {
        let response: LoginResponse = self.client().post(LOGIN_PATH, request).await?;
        Ok(response.token)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<()> {
        self.client().post_unit(REGISTER_PATH, request).await
    }

    async fn logout(&self, token: &str) -> Result<()> {
        self.client()
            .with_token(token)
            .post_unit(LOGOUT_PATH, &serde_json::json!({}))
            .await
    }
}
