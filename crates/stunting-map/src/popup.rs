/// Tooltip and popup content built from a feature's properties

use geojson::JsonObject;
use serde::Serialize;

use crate::feature::{display_opt, display_value, is_truthy, UNKNOWN};
use crate::html::escape;

/// Content bound to one rendered layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Binding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    pub popup: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u32>,
}

/// How a feature's properties are turned into popup content
#[derive(Debug, Clone, PartialEq)]
pub enum PopupTemplate {
    /// Plain key/value table of every property
    PropertyTable,
    /// Card titled by the most specific administrative area name
    AdministrativeCard,
    /// Card for a point incident with location and detail rows
    IncidentCard(IncidentCard),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IncidentCard {
    /// Property used as card title and tooltip
    pub title_key: String,
    /// Properties joined into the location line
    pub location_keys: Vec<String>,
    /// Rows left out when the value is `"-"`
    pub detail_keys: Vec<String>,
    /// Rows always shown
    pub always_keys: Vec<String>,
    /// Property naming an image file, and the directory it lives in
    pub photo: Option<(String, String)>,
}

fn owned(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

impl IncidentCard {
    /// Card matching the field set of markers placed in the editor
    pub fn field_report() -> Self {
        Self {
            title_key: "Kampung".to_string(),
            location_keys: owned(&["Kampung", "RW", "Kelurahan"]),
            detail_keys: owned(&["Dampak", "Durasi", "Kedalaman", "Kerugian", "Penyebab"]),
            always_keys: owned(&["Sumber", "Tahun"]),
            photo: Some(("Foto".to_string(), "/static/images".to_string())),
        }
    }
}

pub const ADMINISTRATIVE_MAX_WIDTH: u32 = 400;
pub const INCIDENT_MAX_WIDTH: u32 = 350;

impl PopupTemplate {
    /// Build tooltip and popup for a feature; features without properties get none
    pub fn bind(&self, properties: Option<&JsonObject>) -> Option<Binding> {
        let props = properties?;
        let binding = match self {
            PopupTemplate::PropertyTable => Binding {
                tooltip: None,
                popup: property_table(props),
                max_width: None,
            },
            PopupTemplate::AdministrativeCard => {
                let header = administrative_header(props);
                Binding {
                    popup: card(&header, &colon_rows(props.iter()), true),
                    tooltip: Some(escape(&header)),
                    max_width: Some(ADMINISTRATIVE_MAX_WIDTH),
                }
            }
            PopupTemplate::IncidentCard(spec) => {
                let title = display_opt(props.get(&spec.title_key));
                Binding {
                    popup: card(&title, &incident_body(spec, props), false),
                    tooltip: Some(escape(&title)),
                    max_width: Some(INCIDENT_MAX_WIDTH),
                }
            }
        };
        Some(binding)
    }
}

/// Most specific administrative area name: kelurahan, then kecamatan, then city
pub fn administrative_header(props: &JsonObject) -> String {
    if is_truthy(props.get("Kelurahan")) {
        format!("Kelurahan {}", display_opt(props.get("Kelurahan")))
    } else if is_truthy(props.get("Kecamatan")) {
        format!("Kecamatan {}", display_opt(props.get("Kecamatan")))
    } else {
        display_opt(props.get("Kabupaten/Kota"))
    }
}

/// `<table>` with one `<tr><th>key</th><td>value</td></tr>` per property, in stored order
pub fn property_table(props: &JsonObject) -> String {
    let rows: String = props
        .iter()
        .map(|(key, value)| {
            format!(
                "<tr><th>{}</th><td>{}</td></tr>",
                escape(key),
                escape(&display_value(value))
            )
        })
        .collect();
    format!("<table class=\"table\" border=\"1\">{}</table>", rows)
}

/// Popup for a freshly placed marker
pub fn coordinates_popup(lat: f64, lng: f64) -> String {
    format!(
        "<table class=\"table\" border=\"1\">\
         <tr><th>Latitude</th><td>{}</td></tr>\
         <tr><th>Longitude</th><td>{}</td></tr>\
         </table>",
        lat, lng
    )
}

fn colon_row(key: &str, value: &str) -> String {
    format!(
        "<tr><td>{}</td><td>:</td><td>{}</td></tr>",
        escape(key),
        escape(value)
    )
}

fn colon_rows<'a>(entries: impl Iterator<Item = (&'a String, &'a serde_json::Value)>) -> String {
    let rows: String = entries
        .map(|(key, value)| colon_row(key, &display_value(value)))
        .collect();
    format!("<table class=\"table table-sm table-striped\">{}</table>", rows)
}

fn card(header: &str, body: &str, nested: bool) -> String {
    let body = if nested {
        format!("<div class=\"card\"><div class=\"card-body\">{}</div></div>", body)
    } else {
        format!("<div class=\"card-body\">{}</div>", body)
    };
    format!(
        "<div class=\"card\"><div class=\"card-header text-center fw-bold\">{}</div>{}</div>",
        escape(header),
        body
    )
}

fn incident_body(spec: &IncidentCard, props: &JsonObject) -> String {
    let mut body = String::new();

    if let Some((key, dir)) = &spec.photo {
        if is_truthy(props.get(key)) && display_opt(props.get(key)) != UNKNOWN {
            body.push_str(&format!(
                "<img src=\"{}/{}\" class=\"img-fluid\" alt=\"{}\"><br><br>",
                escape(dir.trim_end_matches('/')),
                escape(&display_opt(props.get(key))),
                escape(key)
            ));
        }
    }

    let location = spec
        .location_keys
        .iter()
        .map(|key| display_opt(props.get(key)))
        .collect::<Vec<_>>()
        .join(", ");
    body.push_str(&format!(
        "<strong>Lokasi:</strong><br>{}<br><br> <strong>Keterangan:</strong>",
        escape(&location)
    ));

    body.push_str("<table class=\"table table-sm table-striped\">");
    for key in &spec.detail_keys {
        let value = display_opt(props.get(key));
        if value != UNKNOWN {
            body.push_str(&colon_row(key, &value));
        }
    }
    for key in &spec.always_keys {
        body.push_str(&colon_row(key, &display_opt(props.get(key))));
    }
    body.push_str("</table>");
    body
}
