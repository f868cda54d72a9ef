use stunting_common::entities::{PetugasKesehatan, Workload};

use super::{agency_tone, capitalize, created_cell, Cell, ColumnSpec, Span, Tabular, Tone};
use crate::api::entities::Resource;

fn officer(p: &PetugasKesehatan) -> Cell {
    Cell::strong(&p.nama)
        .muted(&p.email)
        .then(Span::Mono(format!("ID: {}", p.id)))
}

fn agency(p: &PetugasKesehatan) -> Cell {
    Cell::badge(capitalize(&p.jenis_skpd), agency_tone(&p.jenis_skpd))
        .then(Span::Strong(p.skpd.clone()))
        .muted(format!("SKPD ID: {}", p.id_skpd))
}

fn workload(p: &PetugasKesehatan) -> Cell {
    let (label, tone) = match p.workload() {
        Workload::Idle => ("Belum Ada Intervensi", Tone::Outline),
        Workload::Active => ("Aktif", Tone::Green),
        Workload::VeryActive => ("Sangat Aktif", Tone::Blue),
    };
    Cell::badge(label, tone)
}

fn account(p: &PetugasKesehatan) -> Cell {
    Cell::badge("Petugas Kesehatan", Tone::Green).muted(format!("User ID: {}", p.id_pengguna))
}

pub static COLUMNS: &[ColumnSpec<PetugasKesehatan>] = &[
    ColumnSpec::sortable("nama", "Nama Petugas", |p: &PetugasKesehatan| p.nama.clone(), officer),
    ColumnSpec::plain(
        "skpd_info",
        "SKPD",
        |p: &PetugasKesehatan| format!("{} {}", p.jenis_skpd, p.skpd),
        agency,
    ),
    ColumnSpec::sortable(
        "intervensi_count",
        "Intervensi",
        |p: &PetugasKesehatan| p.intervensi_count.to_string(),
        |p: &PetugasKesehatan| Cell::strong(p.intervensi_count.to_string()).muted("intervensi"),
    ),
    ColumnSpec::plain(
        "status",
        "Status Aktivitas",
        |p: &PetugasKesehatan| p.workload_key().to_string(),
        workload,
    ),
    ColumnSpec::sortable(
        "created_date",
        "Dibuat",
        |p: &PetugasKesehatan| p.created_date.clone(),
        |p: &PetugasKesehatan| created_cell(&p.created_date, p.updated_date.as_deref(), "Update: "),
    ),
    ColumnSpec::plain(
        "account_info",
        "Info Akun",
        |p: &PetugasKesehatan| format!("{} {}", p.email, p.id_pengguna),
        account,
    ),
    ColumnSpec::actions(),
];

impl Tabular for PetugasKesehatan {
    const RESOURCE: Resource = Resource::PetugasKesehatan;

    fn columns() -> &'static [ColumnSpec<Self>] {
        COLUMNS
    }

    fn delete_blocker(&self) -> Option<String> {
        PetugasKesehatan::delete_blocker(self)
    }

    fn describe(&self) -> String {
        format!("SKPD: {} - {}", self.jenis_skpd, self.skpd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn petugas(intervensi_count: u32) -> PetugasKesehatan {
        PetugasKesehatan {
            id: "p1".to_string(),
            id_pengguna: "u1".to_string(),
            id_skpd: "s1".to_string(),
            email: "rina@example.com".to_string(),
            nama: "Rina".to_string(),
            skpd: "Puskesmas Kesambi".to_string(),
            jenis_skpd: "puskesmas".to_string(),
            intervensi_count,
            created_date: "2025-07-01".to_string(),
            updated_date: Some("2025-07-02".to_string()),
        }
    }

    #[test]
    fn test_status_column() {
        let status = COLUMNS.iter().find(|c| c.id == "status").unwrap();
        assert!(!status.is_sortable());
        assert_eq!(
            status.render(&petugas(0)),
            Cell::badge("Belum Ada Intervensi", Tone::Outline)
        );
        assert_eq!(status.value(&petugas(7)).as_deref(), Some("sangat_aktif"));
    }

    #[test]
    fn test_agency_and_dates() {
        let p = petugas(1);
        assert_eq!(
            COLUMNS[1].render(&p).0[0],
            Span::Badge("Puskesmas".to_string(), Tone::Blue)
        );
        assert_eq!(
            COLUMNS[4].render(&p),
            Cell::text("1/7/2025").muted("Update: 2/7/2025")
        );
        assert_eq!(Tabular::delete_blocker(&p).as_deref(), Some("Ada 1 intervensi terkait"));
    }
}
