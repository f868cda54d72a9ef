/// Overlay view models
///
/// A [`RenderedOverlay`] is a feature collection paired with its symbology
/// and the popup binding of each feature, ready to be handed to the map.

use geojson::FeatureCollection;
use serde::Serialize;

use crate::feature::{collection_name, feature_key};
use crate::popup::{Binding, IncidentCard, PopupTemplate};

/// Path style for lines and polygons
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerStyle {
    pub color: String,
    pub weight: u32,
    pub fill: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
}

impl LayerStyle {
    /// City boundary outline
    pub fn boundary() -> Self {
        Self {
            color: "red".to_string(),
            weight: 3,
            fill: false,
            fill_opacity: None,
        }
    }

    /// Grey outline used for administrative areas
    pub fn administrative() -> Self {
        Self {
            color: "#656565".to_string(),
            weight: 3,
            fill: true,
            fill_opacity: Some(0.0),
        }
    }
}

/// Image marker, sizes and anchors in pixels
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerIcon {
    pub icon_url: String,
    pub icon_size: [u32; 2],
    pub icon_anchor: [i32; 2],
    pub popup_anchor: [i32; 2],
    pub tooltip_anchor: [i32; 2],
}

impl MarkerIcon {
    /// 29x43 pin pointing at its bottom centre
    pub fn pin(icon_url: impl Into<String>) -> Self {
        Self {
            icon_url: icon_url.into(),
            icon_size: [29, 43],
            icon_anchor: [14, 40],
            popup_anchor: [1, -37],
            tooltip_anchor: [15, -25],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Symbology {
    DefaultMarker,
    Icon(MarkerIcon),
    Style(LayerStyle),
}

/// How a dataset is drawn and what its features show when hovered or clicked
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySpec {
    pub symbology: Symbology,
    pub template: Option<PopupTemplate>,
    /// Clicking a feature reports it back for the selection panel
    pub selectable: bool,
}

impl OverlaySpec {
    pub fn property_popups() -> Self {
        Self {
            symbology: Symbology::DefaultMarker,
            template: Some(PopupTemplate::PropertyTable),
            selectable: false,
        }
    }

    pub fn boundary() -> Self {
        Self {
            symbology: Symbology::Style(LayerStyle::boundary()),
            template: None,
            selectable: false,
        }
    }

    /// Viewer dataset: property popups, clickable for the side panel
    pub fn viewer(marker_icon: Option<&str>) -> Self {
        Self {
            symbology: marker_icon
                .map(|url| Symbology::Icon(MarkerIcon::pin(url)))
                .unwrap_or(Symbology::DefaultMarker),
            template: Some(PopupTemplate::PropertyTable),
            selectable: true,
        }
    }

    /// Kecamatan/kelurahan polygons under the report catalog
    pub fn administrative() -> Self {
        Self {
            symbology: Symbology::Style(LayerStyle::administrative()),
            template: Some(PopupTemplate::AdministrativeCard),
            selectable: false,
        }
    }

    /// Editor dataset, shown with field-report cards
    pub fn field_reports() -> Self {
        Self {
            symbology: Symbology::DefaultMarker,
            template: Some(PopupTemplate::IncidentCard(IncidentCard::field_report())),
            selectable: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedFeature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding: Option<Binding>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedOverlay {
    pub name: String,
    pub data: FeatureCollection,
    pub symbology: Symbology,
    /// Parallel to `data.features`
    pub features: Vec<RenderedFeature>,
    pub selectable: bool,
    /// Added to the map immediately, rather than only listed in the layer control
    pub visible: bool,
}

impl RenderedOverlay {
    pub fn render(name: impl Into<String>, data: FeatureCollection, spec: &OverlaySpec) -> Self {
        let features = data
            .features
            .iter()
            .map(|feature| RenderedFeature {
                id: feature_key(feature),
                binding: spec
                    .template
                    .as_ref()
                    .and_then(|t| t.bind(feature.properties.as_ref())),
            })
            .collect();

        Self {
            name: name.into(),
            data,
            symbology: spec.symbology.clone(),
            features,
            selectable: spec.selectable,
            visible: true,
        }
    }
}

/// Name shown in the layer control for the collection at `index`
pub fn overlay_name(collection: &FeatureCollection, index: usize) -> String {
    collection_name(collection)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Layer {}", index + 1))
}

/// Render a set of named collections; only the first starts visible
pub fn catalog(collections: Vec<FeatureCollection>, spec: &OverlaySpec) -> Vec<RenderedOverlay> {
    collections
        .into_iter()
        .enumerate()
        .map(|(index, collection)| {
            let name = overlay_name(&collection, index);
            let mut overlay = RenderedOverlay::render(name, collection, spec);
            overlay.visible = index == 0;
            overlay
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn named(name: Option<&str>) -> FeatureCollection {
        let mut value = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "id": "f1",
                "geometry": {"type": "Point", "coordinates": [108.5, -6.7]},
                "properties": {"Kampung": "A"}
            }]
        });
        if let Some(name) = name {
            value["name"] = json!(name);
        }
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_catalog_names_and_visibility() {
        let overlays = catalog(
            vec![named(Some("Balita 2024")), named(None), named(None)],
            &OverlaySpec::property_popups(),
        );

        let names: Vec<_> = overlays.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Balita 2024", "Layer 2", "Layer 3"]);
        let visible: Vec<_> = overlays.iter().map(|o| o.visible).collect();
        assert_eq!(visible, vec![true, false, false]);
    }

    #[test]
    fn test_render_binds_each_feature() {
        let overlay = RenderedOverlay::render("x", named(None), &OverlaySpec::property_popups());
        assert_eq!(overlay.features.len(), 1);
        assert_eq!(overlay.features[0].id.as_deref(), Some("f1"));
        let popup = &overlay.features[0].binding.as_ref().unwrap().popup;
        assert!(popup.contains("<tr><th>Kampung</th><td>A</td></tr>"));
    }

    #[test]
    fn test_boundary_has_no_popups() {
        let overlay = RenderedOverlay::render("boundary", named(None), &OverlaySpec::boundary());
        assert!(overlay.features[0].binding.is_none());
        assert_eq!(overlay.symbology, Symbology::Style(LayerStyle::boundary()));
    }

    #[test]
    fn test_symbology_serializes_for_leaflet() {
        let value = serde_json::to_value(Symbology::Style(LayerStyle::boundary())).unwrap();
        assert_eq!(
            value,
            json!({"kind": "style", "color": "red", "weight": 3, "fill": false})
        );

        let value = serde_json::to_value(Symbology::Icon(MarkerIcon::pin("static/pin.png"))).unwrap();
        assert_eq!(value["iconSize"], json!([29, 43]));
        assert_eq!(value["tooltipAnchor"], json!([15, -25]));
    }

    #[test]
    fn test_page_presets() {
        let viewer = OverlaySpec::viewer(Some("/static/pin.png"));
        assert!(viewer.selectable);
        assert_eq!(viewer.symbology, Symbology::Icon(MarkerIcon::pin("/static/pin.png")));
        assert_eq!(OverlaySpec::viewer(None).symbology, Symbology::DefaultMarker);

        let areas: FeatureCollection = serde_json::from_value(json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": null,
                "properties": {"Kecamatan": "Kesambi", "Kelurahan": "Pekiringan"}
            }]
        }))
        .unwrap();
        let overlay = RenderedOverlay::render("Wilayah", areas, &OverlaySpec::administrative());
        let binding = overlay.features[0].binding.as_ref().unwrap();
        assert_eq!(binding.tooltip.as_deref(), Some("Kelurahan Pekiringan"));
        assert_eq!(binding.max_width, Some(400));

        let reports = OverlaySpec::field_reports();
        assert!(matches!(reports.template, Some(PopupTemplate::IncidentCard(_))));
        assert!(reports.selectable);
        assert!(!OverlaySpec::administrative().selectable);
    }
}
