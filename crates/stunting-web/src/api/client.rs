/// HTTP client configuration and setup

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use stunting_common::types::ApiResponse;
use stunting_common::{Result, StuntingError};

#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
            None => request,
        }
    }

    async fn send_get<T>(&self, path: &str) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let response = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| StuntingError::network(e.to_string()))?;
        read_envelope(response).await
    }

    async fn send_post<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| StuntingError::parse(format!("Failed to serialize body: {}", e)))?
            .send()
            .await
            .map_err(|e| StuntingError::network(e.to_string()))?;
        read_envelope(response).await
    }

    /// GET an enveloped endpoint and return its `data`
    pub async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        unwrap_envelope(self.send_get(path).await?)
    }

    /// POST a JSON body to an enveloped endpoint and return its `data`
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        unwrap_envelope(self.send_post(path, body).await?)
    }

    /// POST where only the status matters
    pub async fn post_unit<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize,
    {
        let envelope = self.send_post::<B, serde_json::Value>(path, body).await?;
        check_status(&envelope)
    }
}

async fn read_envelope<T>(response: Response) -> Result<ApiResponse<T>>
where
    T: DeserializeOwned,
{
    let status = response.status();
    match response.json::<ApiResponse<T>>().await {
        Ok(envelope) => Ok(envelope),
        Err(e) if (200..300).contains(&status) => {
            Err(StuntingError::parse(format!("Failed to parse response: {}", e)))
        }
        Err(_) => Err(StuntingError::http(status)),
    }
}

/// Map a non-success status code to an error
pub fn check_status<T>(envelope: &ApiResponse<T>) -> Result<()> {
    match envelope.status_code {
        200 | 201 => Ok(()),
        401 | 403 => Err(StuntingError::auth(envelope.message.clone())),
        status => {
            log::error!("API error {}: {}", status, envelope.message);
            Err(StuntingError::network(format!("{}: {}", status, envelope.message)))
        }
    }
}

/// Turn an envelope into its payload
pub fn unwrap_envelope<T>(envelope: ApiResponse<T>) -> Result<T> {
    check_status(&envelope)?;
    envelope
        .data
        .ok_or_else(|| StuntingError::parse("Response carried no data"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(status_code: u16, message: &str, data: Option<u32>) -> ApiResponse<u32> {
        ApiResponse {
            status_code,
            message: message.to_string(),
            data,
        }
    }

    #[test]
    fn test_unwrap_envelope() {
        assert_eq!(unwrap_envelope(envelope(200, "ok", Some(7))).unwrap(), 7);

        let err = unwrap_envelope(envelope(401, "Invalid or expired token", None)).unwrap_err();
        assert!(err.invalidates_session());

        let err = unwrap_envelope(envelope(500, "Failed to get SKPD list", None)).unwrap_err();
        assert!(!err.invalidates_session());
        assert!(err.to_string().contains("Failed to get SKPD list"));

        assert!(unwrap_envelope(envelope(200, "ok", None)).is_err());
    }

    #[test]
    fn test_url_join() {
        assert_eq!(ApiClient::new("").url("/api/auth/profile"), "/api/auth/profile");
        assert_eq!(
            ApiClient::new("http://localhost:8080/").url("/api/auth/profile"),
            "http://localhost:8080/api/auth/profile"
        );
    }
}
