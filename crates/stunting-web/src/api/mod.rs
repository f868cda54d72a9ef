/// API client for the stunting backend
///
/// Thin HTTP wrappers over the response envelope shared by every endpoint.

pub mod auth;
pub mod client;
pub mod entities;
pub mod geojson;

use leptos::*;
use stunting_common::config::ClientConfig;

pub use client::ApiClient;

/// Client for the configured backend, carrying the cached token if any
pub fn use_api_client() -> ApiClient {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let client = ApiClient::new(config.api_base_url);
    match crate::auth::use_auth().session.token() {
        Some(token) => client.with_token(token),
        None => client,
    }
}
