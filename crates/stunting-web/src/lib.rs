/// Stunting surveillance web front end
///
/// Client-rendered Leptos app: the public map pages, the report layers, and
/// the admin/community table sections backed by the REST API.

pub mod api;
pub mod app;
pub mod auth;
pub mod columns;
pub mod components;
pub mod leaflet;
pub mod pages;
pub mod types;
pub mod utils;

use gloo_net::http::Request;
use leptos::*;
use stunting_common::config::ClientConfig;
use stunting_common::{Result, StuntingError};
use wasm_bindgen::prelude::wasm_bindgen;

pub const CONFIG_PATH: &str = "/config.json";

/// Runtime configuration published by the static host
async fn fetch_config() -> Result<ClientConfig> {
    let response = Request::get(CONFIG_PATH)
        .send()
        .await
        .map_err(|e| StuntingError::network(e.to_string()))?;
    if !response.ok() {
        return Err(StuntingError::http(response.status()));
    }
    response
        .json()
        .await
        .map_err(|e| StuntingError::parse(format!("Failed to parse {}: {}", CONFIG_PATH, e)))
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("Logger already set: {}", e).into());
    }

    spawn_local(async {
        let config = match fetch_config().await {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Using default client config: {}", e);
                ClientConfig::default()
            }
        };
        if let Err(e) = config.validate() {
            log::error!("Invalid client config: {}", e);
        }

        mount_to_body(move || {
            provide_context(config);
            view! { <app::App/> }
        });
    });
}
