/// In-memory editing of a point dataset
///
/// The editor owns one feature collection. Markers placed on the map are
/// appended with placeholder properties; removed markers are dropped by id,
/// or by exact coordinates for markers that never received one.

use std::collections::HashSet;

use geojson::{feature::Id, Feature, FeatureCollection, Geometry, JsonObject, Value as GeoValue};
use serde_json::Value;
use uuid::Uuid;

use crate::feature::{feature_key, point_lng_lat, UNKNOWN};
use crate::popup::coordinates_popup;
use crate::table::PropertyTable;

/// Property keys given to every placed marker, in display order
pub const PLACEHOLDER_KEYS: [&str; 11] = [
    "RW", "Kampung", "Kelurahan", "Kedalaman", "Durasi", "Dampak", "Penyebab", "Kerugian",
    "Tahun", "Sumber", "Foto",
];

pub fn placeholder_properties() -> JsonObject {
    PLACEHOLDER_KEYS
        .iter()
        .map(|key| (key.to_string(), Value::String(UNKNOWN.to_string())))
        .collect()
}

/// Result of placing a marker
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMarker {
    pub id: String,
    pub popup: String,
}

#[derive(Debug, Clone)]
pub struct MarkerEditor {
    collection: FeatureCollection,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl MarkerEditor {
    /// Take ownership of a loaded collection, giving every feature a unique id
    ///
    /// Features without an id, or whose id collides with an earlier one
    /// (numeric `1` and string `"1"` included), get a fresh one.
    pub fn new(mut collection: FeatureCollection) -> Self {
        let mut seen = HashSet::new();
        for feature in &mut collection.features {
            let key = match feature_key(feature) {
                Some(key) if !seen.contains(&key) => key,
                _ => {
                    let id = new_id();
                    feature.id = Some(Id::String(id.clone()));
                    id
                }
            };
            seen.insert(key);
        }
        Self { collection }
    }

    pub fn collection(&self) -> &FeatureCollection {
        &self.collection
    }

    pub fn len(&self) -> usize {
        self.collection.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.features.is_empty()
    }

    /// Append a Point feature at `(lng, lat)` with the placeholder template
    pub fn place_marker(&mut self, lng: f64, lat: f64) -> PlacedMarker {
        let id = new_id();
        self.collection.features.push(Feature {
            bbox: None,
            geometry: Some(Geometry::new(GeoValue::Point(vec![lng, lat]))),
            id: Some(Id::String(id.clone())),
            properties: Some(placeholder_properties()),
            foreign_members: None,
        });
        log::debug!("placed marker {} at [{}, {}]", id, lng, lat);

        PlacedMarker {
            id,
            popup: coordinates_popup(lat, lng),
        }
    }

    /// Drop the feature with this id; returns whether one was removed
    pub fn remove(&mut self, id: &str) -> bool {
        let features = &mut self.collection.features;
        match features.iter().position(|feature| feature_key(feature).as_deref() == Some(id)) {
            Some(index) => {
                features.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drop every Point feature located exactly at `(lng, lat)`
    ///
    /// Non-point features are never removed. Returns the number dropped.
    pub fn remove_at(&mut self, lng: f64, lat: f64) -> usize {
        let before = self.len();
        self.collection
            .features
            .retain(|feature| point_lng_lat(feature) != Some((lng, lat)));
        before - self.len()
    }

    pub fn table(&self) -> PropertyTable {
        PropertyTable::project(Some(&self.collection))
    }
}
