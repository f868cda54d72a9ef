/// GeoJSON documents over HTTP

use async_trait::async_trait;
use geojson::FeatureCollection;
use gloo_net::http::Request;
use stunting_common::{Result, StuntingError};
use stunting_map::GeoJsonSource;

use super::client::ApiClient;

/// Fetches static `.geojson` files and the collection endpoint
#[derive(Debug, Clone, Default)]
pub struct HttpGeoJsonSource {
    client: ApiClient,
}

impl HttpGeoJsonSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl GeoJsonSource for HttpGeoJsonSource {
    async fn fetch_collection(&self, url: &str) -> Result<FeatureCollection> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| StuntingError::network(e.to_string()))?;

        if !response.ok() {
            return Err(StuntingError::http(response.status()));
        }

        response
            .json::<FeatureCollection>()
            .await
            .map_err(|e| StuntingError::geojson(e.to_string()))
    }

    async fn fetch_catalog(&self, url: &str) -> Result<Vec<FeatureCollection>> {
        self.client.get(url).await
    }
}
