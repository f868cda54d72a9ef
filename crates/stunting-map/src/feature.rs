use geojson::{feature::Id, Feature, FeatureCollection, Value as GeoValue};
use serde_json::Value;

/// Sentinel stored in a property whose value is not known yet
pub const UNKNOWN: &str = "-";

/// Text shown for a property value; null renders empty
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            // 12.0 is shown as 12, like the browser would
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// Display text for an optional property, absent renders empty
pub fn display_opt(value: Option<&Value>) -> String {
    value.map(display_value).unwrap_or_default()
}

/// Whether a property value counts as present when picking headers
///
/// Absent, null, empty string, `false` and zero are all treated as missing.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

pub fn property<'a>(feature: &'a Feature, key: &str) -> Option<&'a Value> {
    feature.properties.as_ref().and_then(|props| props.get(key))
}

/// `(lng, lat)` of a Point feature
pub fn point_lng_lat(feature: &Feature) -> Option<(f64, f64)> {
    match feature.geometry.as_ref().map(|g| &g.value) {
        Some(GeoValue::Point(position)) if position.len() >= 2 => Some((position[0], position[1])),
        _ => None,
    }
}

/// Stable identifier of a feature, numeric ids are rendered as text
pub fn feature_key(feature: &Feature) -> Option<String> {
    match feature.id.as_ref()? {
        Id::String(s) => Some(s.clone()),
        Id::Number(n) => Some(n.to_string()),
    }
}

/// Optional `name` member carried next to `features`
pub fn collection_name(collection: &FeatureCollection) -> Option<&str> {
    collection
        .foreign_members
        .as_ref()
        .and_then(|members| members.get("name"))
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!(null)), "");
        assert_eq!(display_value(&json!("RW 05")), "RW 05");
        assert_eq!(display_value(&json!(12)), "12");
        assert_eq!(display_value(&json!(12.0)), "12");
        assert_eq!(display_value(&json!(1.5)), "1.5");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_opt(None), "");
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some(&json!(null))));
        assert!(!is_truthy(Some(&json!(""))));
        assert!(!is_truthy(Some(&json!(0))));
        assert!(!is_truthy(Some(&json!(false))));
        assert!(is_truthy(Some(&json!("-"))));
        assert!(is_truthy(Some(&json!(3))));
    }

    #[test]
    fn test_collection_name_and_point() {
        let collection: FeatureCollection = serde_json::from_value(json!({
            "type": "FeatureCollection",
            "name": "Sebaran 2023",
            "features": [{
                "type": "Feature",
                "id": 7,
                "geometry": {"type": "Point", "coordinates": [108.55, -6.74]},
                "properties": {"RW": "05"}
            }]
        }))
        .unwrap();

        assert_eq!(collection_name(&collection), Some("Sebaran 2023"));
        let feature = &collection.features[0];
        assert_eq!(point_lng_lat(feature), Some((108.55, -6.74)));
        assert_eq!(feature_key(feature).as_deref(), Some("7"));
        assert_eq!(property(feature, "RW"), Some(&json!("05")));
    }
}
