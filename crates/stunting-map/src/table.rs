/// Schema-less tabular projection of a feature collection

use geojson::{Feature, FeatureCollection};

use crate::feature::display_opt;
use crate::html::escape;

pub const NO_DATA: &str = "<p>No data available</p>";
pub const NO_FEATURE_SELECTED: &str = "<p>No feature selected</p>";

/// One column per distinct property key, one row per feature
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl PropertyTable {
    /// Project a collection; headers are the union of keys in first-seen order
    pub fn project(collection: Option<&FeatureCollection>) -> Self {
        let features = match collection {
            Some(c) => &c.features,
            None => return Self::default(),
        };

        let mut headers: Vec<String> = Vec::new();
        for feature in features {
            if let Some(props) = &feature.properties {
                for key in props.keys() {
                    if !headers.iter().any(|h| h == key) {
                        headers.push(key.clone());
                    }
                }
            }
        }

        let rows = features
            .iter()
            .map(|feature| {
                headers
                    .iter()
                    .map(|key| {
                        display_opt(feature.properties.as_ref().and_then(|p| p.get(key)))
                    })
                    .collect()
            })
            .collect();

        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_html(&self) -> String {
        if self.is_empty() {
            return NO_DATA.to_string();
        }

        let header_row: String = self
            .headers
            .iter()
            .map(|h| format!("<th>{}</th>", escape(h)))
            .collect();
        let data_rows: String = self
            .rows
            .iter()
            .map(|row| {
                let cells: String = row
                    .iter()
                    .map(|cell| format!("<td>{}</td>", escape(cell)))
                    .collect();
                format!("<tr>{}</tr>", cells)
            })
            .collect();

        format!(
            "<table class=\"table\" border=\"1\" cellpadding=\"4\" cellspacing=\"0\">\
             <thead><tr>{}</tr></thead><tbody>{}</tbody></table>",
            header_row, data_rows
        )
    }
}

/// Key/value rows of the feature shown in the selection panel
pub fn selected_rows(feature: Option<&Feature>) -> Option<Vec<(String, String)>> {
    let props = feature?.properties.as_ref()?;
    Some(
        props
            .iter()
            .map(|(key, value)| (key.clone(), display_opt(Some(value))))
            .collect(),
    )
}

pub fn selected_html(feature: Option<&Feature>) -> String {
    match selected_rows(feature) {
        None => NO_FEATURE_SELECTED.to_string(),
        Some(rows) => {
            let body: String = rows
                .iter()
                .map(|(k, v)| format!("<tr><th>{}</th><td>{}</td></tr>", escape(k), escape(v)))
                .collect();
            format!(
                "<table class=\"table\" border=\"1\" cellpadding=\"4\" cellspacing=\"0\">{}</table>",
                body
            )
        }
    }
}
