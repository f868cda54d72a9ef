/// Asynchronous overlay loading
///
/// Fetch failures are logged and leave the map untouched; callers never see
/// an error, only the absence of the overlay.

use async_trait::async_trait;
use geojson::FeatureCollection;
use stunting_common::Result;

use crate::editor::MarkerEditor;
use crate::overlay::{catalog, OverlaySpec, RenderedOverlay};

/// Where GeoJSON documents come from
#[async_trait(?Send)]
pub trait GeoJsonSource {
    /// A single FeatureCollection document
    async fn fetch_collection(&self, url: &str) -> Result<FeatureCollection>;

    /// An API envelope whose `data` is a list of collections
    async fn fetch_catalog(&self, url: &str) -> Result<Vec<FeatureCollection>>;
}

/// Where rendered overlays go
pub trait MapSurface {
    fn add_overlay(&self, overlay: &RenderedOverlay) -> Result<()>;

    /// Register overlays in a layer switcher, adding the visible ones
    fn add_layer_control(&self, overlays: &[RenderedOverlay]) -> Result<()>;
}

/// Fetch, render and add one overlay
pub async fn load_overlay<S, M>(
    source: &S,
    surface: &M,
    url: &str,
    name: &str,
    spec: &OverlaySpec,
) -> Option<RenderedOverlay>
where
    S: GeoJsonSource + ?Sized,
    M: MapSurface + ?Sized,
{
    let collection = match source.fetch_collection(url).await {
        Ok(collection) => collection,
        Err(e) => {
            log::error!("Error loading geojson from {}: {}", url, e);
            return None;
        }
    };

    let overlay = RenderedOverlay::render(name, collection, spec);
    if let Err(e) = surface.add_overlay(&overlay) {
        log::error!("Error adding overlay {}: {}", name, e);
        return None;
    }

    log::info!("Loaded {} features from {}", overlay.features.len(), url);
    Some(overlay)
}

pub async fn load_boundary<S, M>(source: &S, surface: &M, url: &str) -> bool
where
    S: GeoJsonSource + ?Sized,
    M: MapSurface + ?Sized,
{
    load_overlay(source, surface, url, "Boundary", &OverlaySpec::boundary())
        .await
        .is_some()
}

/// Load every named collection behind `url` into a layer control
///
/// Returns the number of overlays registered.
pub async fn load_catalog<S, M>(source: &S, surface: &M, url: &str, spec: &OverlaySpec) -> usize
where
    S: GeoJsonSource + ?Sized,
    M: MapSurface + ?Sized,
{
    let collections = match source.fetch_catalog(url).await {
        Ok(collections) => collections,
        Err(e) => {
            log::error!("Error loading geojson catalog from {}: {}", url, e);
            return 0;
        }
    };

    let overlays = catalog(collections, spec);
    match surface.add_layer_control(&overlays) {
        Ok(()) => overlays.len(),
        Err(e) => {
            log::error!("Error adding layer control: {}", e);
            0
        }
    }
}

/// Load a dataset into a [`MarkerEditor`] and draw it
///
/// Features are given ids before rendering so drawn markers can be matched
/// back on removal.
pub async fn load_editable<S, M>(
    source: &S,
    surface: &M,
    url: &str,
    spec: &OverlaySpec,
) -> Option<MarkerEditor>
where
    S: GeoJsonSource + ?Sized,
    M: MapSurface + ?Sized,
{
    let editor = match source.fetch_collection(url).await {
        Ok(collection) => MarkerEditor::new(collection),
        Err(e) => {
            log::error!("Error loading geojson from {}: {}", url, e);
            return None;
        }
    };

    let overlay = RenderedOverlay::render("Data", editor.collection().clone(), spec);
    if let Err(e) = surface.add_overlay(&overlay) {
        log::error!("Error adding editable overlay: {}", e);
        return None;
    }

    Some(editor)
}
