/// Declarative column specifications for the admin tables
///
/// Each table is a fixed slice of [`ColumnSpec`] records. A column pairs an
/// accessor (the value used for sorting and filtering) with a cell renderer
/// that produces display-only [`Cell`] content. The `actions` column carries
/// neither and is drawn by the table component itself.

pub mod balita;
pub mod intervensi;
pub mod keluarga;
pub mod laporan;
pub mod petugas;
pub mod riwayat;
pub mod skpd;

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::Serialize;
use stunting_common::entities::Record;

use crate::api::entities::Resource;

pub const ACTIONS_ID: &str = "actions";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    Static(&'static str),
    /// Header rendered as a sort-toggle button
    Sortable(&'static str),
}

impl Header {
    pub fn label(&self) -> &'static str {
        match self {
            Header::Static(label) | Header::Sortable(label) => label,
        }
    }
}

/// Badge colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Default,
    Secondary,
    Outline,
    Destructive,
    Green,
    Blue,
    Purple,
    Orange,
    Red,
    Gray,
}

/// One line of a cell
#[derive(Debug, Clone, PartialEq)]
pub enum Span {
    Strong(String),
    Text(String),
    Muted(String),
    Mono(String),
    Badge(String, Tone),
}

/// Display content of a table cell, one span per line
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell(pub Vec<Span>);

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell(vec![Span::Text(value.into())])
    }

    pub fn strong(value: impl Into<String>) -> Self {
        Cell(vec![Span::Strong(value.into())])
    }

    pub fn mono(value: impl Into<String>) -> Self {
        Cell(vec![Span::Mono(value.into())])
    }

    pub fn badge(value: impl Into<String>, tone: Tone) -> Self {
        Cell(vec![Span::Badge(value.into(), tone)])
    }

    pub fn then(mut self, span: Span) -> Self {
        self.0.push(span);
        self
    }

    pub fn muted(self, value: impl Into<String>) -> Self {
        self.then(Span::Muted(value.into()))
    }
}

#[derive(Debug)]
pub enum ColumnKind<T> {
    Data {
        accessor: fn(&T) -> String,
        cell: fn(&T) -> Cell,
    },
    Actions,
}

#[derive(Debug)]
pub struct ColumnSpec<T> {
    pub id: &'static str,
    pub header: Header,
    pub kind: ColumnKind<T>,
}

impl<T> ColumnSpec<T> {
    pub const fn sortable(
        id: &'static str,
        label: &'static str,
        accessor: fn(&T) -> String,
        cell: fn(&T) -> Cell,
    ) -> Self {
        Self {
            id,
            header: Header::Sortable(label),
            kind: ColumnKind::Data { accessor, cell },
        }
    }

    pub const fn plain(
        id: &'static str,
        label: &'static str,
        accessor: fn(&T) -> String,
        cell: fn(&T) -> Cell,
    ) -> Self {
        Self {
            id,
            header: Header::Static(label),
            kind: ColumnKind::Data { accessor, cell },
        }
    }

    pub const fn actions() -> Self {
        Self {
            id: ACTIONS_ID,
            header: Header::Static("Aksi"),
            kind: ColumnKind::Actions,
        }
    }

    pub fn is_actions(&self) -> bool {
        matches!(self.kind, ColumnKind::Actions)
    }

    pub fn is_sortable(&self) -> bool {
        !self.is_actions() && matches!(self.header, Header::Sortable(_))
    }

    pub fn is_hideable(&self) -> bool {
        !self.is_actions()
    }

    /// Sort and filter value
    pub fn value(&self, row: &T) -> Option<String> {
        match self.kind {
            ColumnKind::Data { accessor, .. } => Some(accessor(row)),
            ColumnKind::Actions => None,
        }
    }

    pub fn render(&self, row: &T) -> Cell {
        match self.kind {
            ColumnKind::Data { cell, .. } => cell(row),
            ColumnKind::Actions => Cell::default(),
        }
    }
}

/// A row type with an admin table
pub trait Tabular: Record + Serialize + DeserializeOwned {
    const RESOURCE: Resource;

    fn columns() -> &'static [ColumnSpec<Self>];

    /// Reason the row may not be deleted, from its linked-record counts
    fn delete_blocker(&self) -> Option<String> {
        None
    }

    /// Text for the delete confirmation prompt
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Sorting, filtering and column visibility of one table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableState {
    pub sort: Option<(&'static str, SortDirection)>,
    pub filter: String,
    pub hidden: HashSet<&'static str>,
}

impl TableState {
    /// Descending when the column is currently ascending, ascending otherwise
    pub fn toggle_sort<T>(&mut self, column: &ColumnSpec<T>) {
        if !column.is_sortable() {
            return;
        }
        let direction = match self.sort_direction(column.id) {
            Some(SortDirection::Ascending) => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        self.sort = Some((column.id, direction));
    }

    pub fn sort_direction(&self, id: &str) -> Option<SortDirection> {
        self.sort
            .filter(|(sorted, _)| *sorted == id)
            .map(|(_, direction)| direction)
    }

    pub fn toggle_visibility<T>(&mut self, column: &ColumnSpec<T>) {
        if !column.is_hideable() {
            return;
        }
        if !self.hidden.remove(column.id) {
            self.hidden.insert(column.id);
        }
    }

    pub fn is_visible(&self, id: &str) -> bool {
        !self.hidden.contains(id)
    }

    pub fn visible<'a, T>(&self, columns: &'a [ColumnSpec<T>]) -> Vec<&'a ColumnSpec<T>> {
        columns.iter().filter(|c| self.is_visible(c.id)).collect()
    }

    fn matches<T>(&self, columns: &[ColumnSpec<T>], row: &T) -> bool {
        let needle = self.filter.trim().to_lowercase();
        needle.is_empty()
            || columns
                .iter()
                .filter_map(|column| column.value(row))
                .any(|value| value.to_lowercase().contains(&needle))
    }

    /// Filtered and sorted view of `rows`
    pub fn apply<'a, T>(&self, columns: &[ColumnSpec<T>], rows: &'a [T]) -> Vec<&'a T> {
        let mut view: Vec<&T> = rows
            .iter()
            .filter(|row| self.matches(columns, row))
            .collect();

        let sort = self
            .sort
            .and_then(|(id, direction)| columns.iter().find(|c| c.id == id).map(|c| (c, direction)));

        if let Some((column, direction)) = sort {
            // stable sort keeps API order among equal values
            view.sort_by(|a, b| {
                let ordering = compare_values(
                    &column.value(a).unwrap_or_default(),
                    &column.value(b).unwrap_or_default(),
                );
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        view
    }
}

/// Numbers compare numerically, anything else case-insensitively
pub fn compare_values(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").ok().map(|dt| dt.date()))
        .or_else(|| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok())
        .or_else(|| value.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()))
}

/// `d/m/yyyy`, the Indonesian short date; unparseable input is shown as is
pub fn format_date(value: &str) -> String {
    if value.trim().is_empty() {
        return "-".to_string();
    }
    match parse_date(value) {
        Some(date) => format!("{}/{}/{}", date.day(), date.month(), date.year()),
        None => value.to_string(),
    }
}

pub fn format_optional_date(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).map(format_date)
}

/// First letter upper-cased
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Kelurahan over kecamatan
pub(crate) fn region_cell(kelurahan: &str, kecamatan: &str) -> Cell {
    Cell::strong(kelurahan).muted(kecamatan)
}

/// Creation date, with the update date underneath when there is one
pub(crate) fn created_cell(created: &str, updated: Option<&str>, update_label: &str) -> Cell {
    let cell = Cell::text(format_date(created));
    match format_optional_date(updated) {
        Some(date) => cell.muted(format!("{}{}", update_label, date)),
        None => cell,
    }
}

/// Agency type colour shared by the SKPD and officer tables
pub(crate) fn agency_tone(jenis: &str) -> Tone {
    match jenis {
        "puskesmas" => Tone::Blue,
        "kelurahan" => Tone::Green,
        "skpd" => Tone::Purple,
        _ => Tone::Gray,
    }
}
