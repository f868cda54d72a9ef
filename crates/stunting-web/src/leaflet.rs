/// Leaflet bindings
///
/// The map itself is Leaflet (plus leaflet-geoman for marker drawing), loaded
/// by `index.html`. Overlays cross the boundary as JSON produced by
/// `stunting_map`, so the JavaScript side only draws what it is given.

use std::any::Any;
use std::cell::RefCell;

use geojson::Feature;
use stunting_common::config::MapViewConfig;
use stunting_common::{Result, StuntingError};
use stunting_map::{MapSurface, RenderedOverlay};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = r#"
function drawOverlay(map, overlay) {
  const options = {
    onEachFeature(feature, layer) {
      const index = overlay.data.features.indexOf(feature);
      const rendered = overlay.features[index] || {};
      const binding = rendered.binding;
      if (binding) {
        if (binding.tooltip) {
          layer.bindTooltip(binding.tooltip);
        }
        layer.bindPopup(binding.popup, binding.maxWidth ? { maxWidth: binding.maxWidth } : {});
      }
      if (overlay.selectable && map._onSelect) {
        layer.on('click', () => map._onSelect(JSON.stringify(feature)));
      }
    },
  };

  const symbology = overlay.symbology;
  if (symbology.kind === 'icon') {
    const icon = L.icon({
      iconUrl: symbology.iconUrl,
      iconSize: symbology.iconSize,
      iconAnchor: symbology.iconAnchor,
      popupAnchor: symbology.popupAnchor,
      tooltipAnchor: symbology.tooltipAnchor,
    });
    options.pointToLayer = (_feature, latlng) => L.marker(latlng, { icon });
  } else if (symbology.kind === 'style') {
    options.style = {
      color: symbology.color,
      weight: symbology.weight,
      fill: symbology.fill,
      fillOpacity: symbology.fillOpacity,
    };
  }

  return L.geoJSON(overlay.data, options);
}

export function createMap(element, view) {
  if (!window.L) {
    throw new Error('Leaflet is not loaded');
  }
  const options = JSON.parse(view);
  const map = L.map(element).setView(options.center, options.zoom);
  L.tileLayer(options.tile_url, {
    maxZoom: options.max_zoom,
    attribution: options.tile_attribution,
  }).addTo(map);
  // the element may not be attached yet when the map is created
  setTimeout(() => map.invalidateSize(), 0);
  return map;
}

export function removeMap(map) {
  map.remove();
}

export function setSelectHandler(map, handler) {
  map._onSelect = handler;
}

export function addOverlay(map, overlayJson) {
  drawOverlay(map, JSON.parse(overlayJson)).addTo(map);
}

export function addLayerControl(map, overlaysJson) {
  const layers = {};
  for (const overlay of JSON.parse(overlaysJson)) {
    const layer = drawOverlay(map, overlay);
    layers[overlay.name] = layer;
    if (overlay.visible) {
      layer.addTo(map);
    }
  }
  L.control.layers(null, layers).addTo(map);
}

export function enableMarkerEditing(map, onCreate, onRemove) {
  if (!map.pm) {
    throw new Error('leaflet-geoman is not loaded');
  }
  map.pm.addControls({
    position: 'topleft',
    drawMarker: true,
    drawCircleMarker: false,
    drawPolyline: false,
    drawRectangle: false,
    drawPolygon: false,
    drawCircle: false,
    drawText: false,
    editMode: false,
    dragMode: false,
    cutPolygon: false,
    rotateMode: false,
    removalMode: true,
  });
  map.on('pm:create', (e) => {
    const latlng = e.layer.getLatLng();
    const placed = JSON.parse(onCreate(latlng.lat, latlng.lng));
    e.layer.feature = { type: 'Feature', id: placed.id };
    e.layer.bindPopup(placed.popup).openPopup();
  });
  map.on('pm:remove', (e) => {
    if (!e.layer.getLatLng) {
      return;
    }
    const latlng = e.layer.getLatLng();
    const id = e.layer.feature && e.layer.feature.id != null ? String(e.layer.feature.id) : '';
    onRemove(id, latlng.lat, latlng.lng);
  });
}

export function copyToClipboard(text) {
  if (navigator.clipboard) {
    navigator.clipboard.writeText(text).catch((err) => console.error(err));
  }
}
"#)]
extern "C" {
    #[wasm_bindgen(catch, js_name = createMap)]
    fn create_map(element: &web_sys::HtmlElement, view: &str) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = removeMap)]
    fn remove_map(map: &JsValue);

    #[wasm_bindgen(js_name = setSelectHandler)]
    fn set_select_handler(map: &JsValue, handler: &Closure<dyn FnMut(String)>);

    #[wasm_bindgen(catch, js_name = addOverlay)]
    fn add_overlay(map: &JsValue, overlay: &str) -> std::result::Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = addLayerControl)]
    fn add_layer_control(map: &JsValue, overlays: &str) -> std::result::Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = enableMarkerEditing)]
    fn enable_marker_editing(
        map: &JsValue,
        on_create: &Closure<dyn FnMut(f64, f64) -> String>,
        on_remove: &Closure<dyn FnMut(String, f64, f64)>,
    ) -> std::result::Result<(), JsValue>;

    #[wasm_bindgen(js_name = copyToClipboard)]
    pub fn copy_to_clipboard(text: &str);
}

fn js_error(context: &str, err: JsValue) -> StuntingError {
    StuntingError::geojson(format!("{}: {:?}", context, err))
}

/// A Leaflet map mounted in a DOM element
pub struct LeafletMap {
    map: JsValue,
    /// Callbacks handed to JavaScript, dropped with the map
    closures: RefCell<Vec<Box<dyn Any>>>,
}

impl LeafletMap {
    pub fn mount(element: &web_sys::HtmlElement, view: &MapViewConfig) -> Result<Self> {
        let options = serde_json::to_string(view)?;
        let map = create_map(element, &options).map_err(|e| js_error("Error creating map", e))?;
        log::debug!("Map mounted at {:?} zoom {}", view.center, view.zoom);
        Ok(Self {
            map,
            closures: RefCell::new(Vec::new()),
        })
    }

    /// Report clicks on features of selectable overlays
    pub fn on_select(&self, mut handler: impl FnMut(Option<Feature>) + 'static) {
        let closure = Closure::<dyn FnMut(String)>::new(move |json: String| {
            match serde_json::from_str::<Feature>(&json) {
                Ok(feature) => handler(Some(feature)),
                Err(e) => {
                    log::error!("Error reading selected feature: {}", e);
                    handler(None);
                }
            }
        });
        set_select_handler(&self.map, &closure);
        self.closures.borrow_mut().push(Box::new(closure));
    }

    /// Turn on marker drawing and removal
    ///
    /// `on_create` gets `(lng, lat)` and returns the placed marker's id and
    /// popup; `on_remove` gets the removed marker's id, when it has one,
    /// and its `(lng, lat)`.
    pub fn enable_editing<C, R>(&self, mut on_create: C, mut on_remove: R) -> Result<()>
    where
        C: FnMut(f64, f64) -> stunting_map::PlacedMarker + 'static,
        R: FnMut(Option<String>, f64, f64) + 'static,
    {
        let create = Closure::<dyn FnMut(f64, f64) -> String>::new(move |lat: f64, lng: f64| {
            let placed = on_create(lng, lat);
            serde_json::json!({ "id": placed.id, "popup": placed.popup }).to_string()
        });
        let remove = Closure::<dyn FnMut(String, f64, f64)>::new(move |id: String, lat: f64, lng: f64| {
            let id = (!id.is_empty()).then_some(id);
            on_remove(id, lng, lat);
        });

        enable_marker_editing(&self.map, &create, &remove)
            .map_err(|e| js_error("Error enabling marker editing", e))?;
        let mut closures = self.closures.borrow_mut();
        closures.push(Box::new(create));
        closures.push(Box::new(remove));
        Ok(())
    }
}

impl MapSurface for LeafletMap {
    fn add_overlay(&self, overlay: &RenderedOverlay) -> Result<()> {
        let json = serde_json::to_string(overlay)?;
        add_overlay(&self.map, &json).map_err(|e| js_error("Error drawing overlay", e))
    }

    fn add_layer_control(&self, overlays: &[RenderedOverlay]) -> Result<()> {
        let json = serde_json::to_string(overlays)?;
        add_layer_control(&self.map, &json).map_err(|e| js_error("Error adding layer control", e))
    }
}

impl Drop for LeafletMap {
    fn drop(&mut self) {
        remove_map(&self.map);
    }
}
