use stunting_common::entities::{Intervensi, Staffing};

use super::{capitalize, created_cell, format_date, Cell, ColumnSpec, Span, Tabular, Tone};
use crate::api::entities::Resource;

/// Colour of an intervention type, shared with the examination history table
pub fn jenis_tone(jenis: &str) -> Tone {
    match jenis {
        "gizi" => Tone::Green,
        "kesehatan" => Tone::Blue,
        "sosial" => Tone::Purple,
        _ => Tone::Gray,
    }
}

/// `value` cut to `max` characters with an ellipsis
pub fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        format!("{}...", value.chars().take(max).collect::<String>())
    } else {
        value.to_string()
    }
}

fn balita_info(i: &Intervensi) -> Cell {
    Cell::strong(&i.nama_balita).muted(format!("ID: {}", i.id_balita))
}

fn jenis_tanggal(i: &Intervensi) -> Cell {
    Cell::badge(capitalize(&i.jenis), jenis_tone(&i.jenis)).muted(format_date(&i.tanggal))
}

fn description(i: &Intervensi) -> Cell {
    Cell::text(truncate(&i.deskripsi, 60)).muted(format!("Hasil: {}", truncate(&i.hasil, 40)))
}

fn petugas_status(i: &Intervensi) -> Cell {
    let (label, tone) = match i.staffing() {
        Staffing::Unstaffed => ("Belum Ada Petugas", Tone::Destructive),
        Staffing::Active => ("Aktif", Tone::Default),
        Staffing::Full => ("Tim Lengkap", Tone::Secondary),
    };
    Cell::strong(i.petugas_count.to_string()).then(Span::Badge(label.to_string(), tone))
}

fn created(i: &Intervensi) -> Cell {
    let cell = created_cell(&i.created_date, i.updated_date.as_deref(), "Update: ");
    match &i.created_by {
        Some(by) if !by.is_empty() => cell.muted(format!("by {}", by)),
        _ => cell,
    }
}

pub static COLUMNS: &[ColumnSpec<Intervensi>] = &[
    ColumnSpec::plain("balita_info", "Data Balita", |i: &Intervensi| i.nama_balita.clone(), balita_info),
    ColumnSpec::plain(
        "jenis_tanggal",
        "Jenis & Tanggal",
        |i: &Intervensi| format!("{} {}", i.jenis, i.tanggal),
        jenis_tanggal,
    ),
    ColumnSpec::plain("deskripsi", "Deskripsi", |i: &Intervensi| i.deskripsi.clone(), description),
    ColumnSpec::plain(
        "petugas_status",
        "Status Petugas",
        |i: &Intervensi| i.staffing_key().to_string(),
        petugas_status,
    ),
    ColumnSpec::sortable(
        "riwayat_count",
        "Riwayat",
        |i: &Intervensi| i.riwayat_count.to_string(),
        |i: &Intervensi| Cell::strong(i.riwayat_count.to_string()).muted("riwayat"),
    ),
    ColumnSpec::sortable("created_date", "Dibuat", |i: &Intervensi| i.created_date.clone(), created),
    ColumnSpec::actions(),
];

impl Tabular for Intervensi {
    const RESOURCE: Resource = Resource::Intervensi;

    fn columns() -> &'static [ColumnSpec<Self>] {
        COLUMNS
    }

    fn delete_blocker(&self) -> Option<String> {
        Intervensi::delete_blocker(self)
    }

    fn describe(&self) -> String {
        format!("Balita: {} • {}", self.nama_balita, self.jenis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::{SortDirection, TableState};

    fn intervensi(id: &str, petugas_count: u32, riwayat_count: u32) -> Intervensi {
        Intervensi {
            id: id.to_string(),
            id_balita: "b1".to_string(),
            nama_balita: "Nur".to_string(),
            jenis: "gizi".to_string(),
            tanggal: "2025-07-10".to_string(),
            deskripsi: "Pemberian makanan tambahan".to_string(),
            hasil: "Berat badan naik".to_string(),
            petugas_count,
            riwayat_count,
            created_date: "2025-07-10".to_string(),
            updated_date: None,
            created_by: Some("admin".to_string()),
            updated_by: None,
        }
    }

    #[test]
    fn test_riwayat_count_sorts_numerically() {
        let rows = vec![
            intervensi("a", 0, 10),
            intervensi("b", 0, 9),
            intervensi("c", 0, 100),
        ];
        let mut state = TableState::default();
        let column = COLUMNS.iter().find(|c| c.id == "riwayat_count").unwrap();
        state.toggle_sort(column);
        state.toggle_sort(column);
        assert_eq!(state.sort_direction("riwayat_count"), Some(SortDirection::Descending));

        let ids: Vec<_> = state.apply(COLUMNS, &rows).iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn test_blocked_delete_through_table_trait() {
        assert!(Tabular::delete_blocker(&intervensi("a", 0, 0)).is_none());
        assert_eq!(
            Tabular::delete_blocker(&intervensi("a", 1, 2)).as_deref(),
            Some("Ada 2 riwayat & 1 petugas terkait")
        );
    }

    #[test]
    fn test_status_and_created_cells() {
        let i = intervensi("a", 3, 0);
        assert_eq!(COLUMNS[3].value(&i).as_deref(), Some("tim_lengkap"));
        assert_eq!(
            COLUMNS[3].render(&i).0[1],
            Span::Badge("Tim Lengkap".to_string(), Tone::Secondary)
        );
        assert_eq!(
            COLUMNS[5].render(&i),
            Cell::text("10/7/2025").muted("by admin")
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("abc", 3), "abc");
    }
}
