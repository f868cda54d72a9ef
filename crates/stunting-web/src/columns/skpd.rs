use stunting_common::entities::{Skpd, Staffing};

use super::{agency_tone, capitalize, created_cell, Cell, ColumnSpec, Tabular, Tone};
use crate::api::entities::Resource;

fn staffing(s: &Skpd) -> Cell {
    let (label, tone) = match s.staffing() {
        Staffing::Unstaffed => ("Belum Ada Petugas", Tone::Destructive),
        Staffing::Active => ("Aktif", Tone::Default),
        Staffing::Full => ("Aktif (Banyak Petugas)", Tone::Secondary),
    };
    Cell::badge(label, tone)
}

pub static COLUMNS: &[ColumnSpec<Skpd>] = &[
    ColumnSpec::sortable("skpd", "Nama SKPD", |s: &Skpd| s.skpd.clone(), |s: &Skpd| {
        Cell::strong(&s.skpd).muted(format!("ID: {}", s.id))
    }),
    ColumnSpec::sortable("jenis", "Jenis", |s: &Skpd| s.jenis.clone(), |s: &Skpd| {
        Cell::badge(capitalize(&s.jenis), agency_tone(&s.jenis))
    }),
    ColumnSpec::sortable("petugas_count", "Petugas", |s: &Skpd| s.petugas_count.to_string(), |s: &Skpd| {
        Cell::strong(s.petugas_count.to_string()).muted("petugas")
    }),
    ColumnSpec::sortable("created_date", "Dibuat", |s: &Skpd| s.created_date.clone(), |s: &Skpd| {
        created_cell(&s.created_date, s.updated_date.as_deref(), "Diupdate: ")
    }),
    ColumnSpec::plain("status", "Status", |s: &Skpd| s.staffing_key().to_string(), staffing),
    ColumnSpec::actions(),
];

impl Tabular for Skpd {
    const RESOURCE: Resource = Resource::Skpd;

    fn columns() -> &'static [ColumnSpec<Self>] {
        COLUMNS
    }

    fn delete_blocker(&self) -> Option<String> {
        Skpd::delete_blocker(self)
    }

    fn describe(&self) -> String {
        format!("{} ({})", self.skpd, capitalize(&self.jenis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::TableState;

    fn skpd(id: &str, petugas_count: u32) -> Skpd {
        Skpd {
            id: id.to_string(),
            skpd: format!("Puskesmas {}", id),
            jenis: "puskesmas".to_string(),
            petugas_count,
            created_date: "2025-07-01".to_string(),
            updated_date: None,
        }
    }

    #[test]
    fn test_status_labels() {
        let status = COLUMNS.iter().find(|c| c.id == "status").unwrap();
        assert_eq!(status.render(&skpd("a", 0)), Cell::badge("Belum Ada Petugas", Tone::Destructive));
        assert_eq!(status.render(&skpd("a", 3)), Cell::badge("Aktif", Tone::Default));
        assert_eq!(
            status.render(&skpd("a", 4)),
            Cell::badge("Aktif (Banyak Petugas)", Tone::Secondary)
        );
    }

    #[test]
    fn test_filter_by_derived_status() {
        let rows = vec![skpd("a", 0), skpd("b", 2), skpd("c", 8)];
        let state = TableState {
            filter: "aktif_banyak".to_string(),
            ..Default::default()
        };
        let view = state.apply(COLUMNS, &rows);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "c");
    }

    #[test]
    fn test_only_unstaffed_agencies_can_be_deleted() {
        assert!(Tabular::delete_blocker(&skpd("a", 0)).is_none());
        assert_eq!(
            Tabular::delete_blocker(&skpd("b", 2)).as_deref(),
            Some("Ada 2 petugas terkait")
        );
    }
}
