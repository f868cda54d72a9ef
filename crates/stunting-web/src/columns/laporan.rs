use stunting_common::entities::LaporanMasyarakat;

use super::{capitalize, created_cell, format_date, region_cell, Cell, ColumnSpec, Span, Tabular, Tone};
use crate::api::entities::Resource;

/// Badge colour for a report's processing status
pub fn status_tone(status: &str) -> Tone {
    match status.to_lowercase().as_str() {
        "diproses dan data tidak sesuai" => Tone::Destructive,
        "diproses dan data sesuai" | "sudah perbaikan gizi" => Tone::Secondary,
        "sudah ditindaklanjuti" => Tone::Default,
        _ => Tone::Outline,
    }
}

fn reporter(l: &LaporanMasyarakat) -> Cell {
    Cell::strong(&l.nama_pelapor)
        .muted(&l.nomor_hp_pelapor)
        .then(Span::Text(format!("({})", l.hubungan_dengan_balita)))
}

fn toddler(l: &LaporanMasyarakat) -> Cell {
    Cell::strong(&l.nama_balita)
        .muted(format!("Ayah: {}", l.nama_ayah))
        .muted(format!("Ibu: {}", l.nama_ibu))
}

fn family(l: &LaporanMasyarakat) -> Cell {
    Cell::mono(&l.nomor_kk).muted(&l.alamat)
}

pub static COLUMNS: &[ColumnSpec<LaporanMasyarakat>] = &[
    ColumnSpec::sortable(
        "tanggal_laporan",
        "Tanggal Laporan",
        |l: &LaporanMasyarakat| l.tanggal_laporan.clone(),
        |l: &LaporanMasyarakat| Cell::text(format_date(&l.tanggal_laporan)),
    ),
    ColumnSpec::sortable(
        "nama_pelapor",
        "Pelapor",
        |l: &LaporanMasyarakat| l.nama_pelapor.clone(),
        reporter,
    ),
    ColumnSpec::sortable(
        "nama_balita",
        "Balita",
        |l: &LaporanMasyarakat| l.nama_balita.clone(),
        toddler,
    ),
    ColumnSpec::plain(
        "keluarga_info",
        "Info Keluarga",
        |l: &LaporanMasyarakat| format!("{} {}", l.nomor_kk, l.alamat),
        family,
    ),
    ColumnSpec::plain(
        "wilayah",
        "Wilayah",
        |l: &LaporanMasyarakat| format!("{} {}", l.kelurahan, l.kecamatan),
        |l: &LaporanMasyarakat| region_cell(&l.kelurahan, &l.kecamatan),
    ),
    ColumnSpec::plain(
        "jenis_laporan",
        "Jenis",
        |l: &LaporanMasyarakat| l.jenis_laporan.clone(),
        |l: &LaporanMasyarakat| Cell::badge(capitalize(&l.jenis_laporan), Tone::Outline),
    ),
    ColumnSpec::sortable(
        "status_laporan",
        "Status",
        |l: &LaporanMasyarakat| l.status_laporan.clone(),
        |l: &LaporanMasyarakat| Cell::badge(capitalize(&l.status_laporan), status_tone(&l.status_laporan)),
    ),
    ColumnSpec::sortable(
        "created_date",
        "Dibuat",
        |l: &LaporanMasyarakat| l.created_date.clone(),
        |l: &LaporanMasyarakat| created_cell(&l.created_date, l.updated_date.as_deref(), "Diupdate: "),
    ),
    ColumnSpec::actions(),
];

impl Tabular for LaporanMasyarakat {
    const RESOURCE: Resource = Resource::LaporanMasyarakat;

    fn columns() -> &'static [ColumnSpec<Self>] {
        COLUMNS
    }

    fn describe(&self) -> String {
        format!("Balita: {} • {}", self.nama_balita, self.status_laporan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tones() {
        assert_eq!(status_tone("Belum diproses"), Tone::Outline);
        assert_eq!(status_tone("Diproses dan data tidak sesuai"), Tone::Destructive);
        assert_eq!(status_tone("diproses dan data sesuai"), Tone::Secondary);
        assert_eq!(status_tone("Sudah ditindaklanjuti"), Tone::Default);
        assert_eq!(status_tone("Belum ditindaklanjuti"), Tone::Outline);
        assert_eq!(status_tone("Sudah perbaikan gizi"), Tone::Secondary);
    }

    #[test]
    fn test_community_rows_without_reporter_name() {
        let json = r#"{
            "id": "l1",
            "id_balita": "b1",
            "tanggal_laporan": "2025-07-03",
            "hubungan_dengan_balita": "Tetangga",
            "nomor_hp_pelapor": "08123",
            "created_date": "2025-07-03T09:00:00Z",
            "updated_date": "2025-07-05T09:00:00Z",
            "nama_balita": "Nur",
            "nama_ayah": "Ahmad",
            "nama_ibu": "Aisyah",
            "nomor_kk": "3274",
            "alamat": "Jl. Pemuda",
            "kelurahan": "Kesambi",
            "kecamatan": "Kesambi",
            "status_laporan": "Belum diproses"
        }"#;
        let laporan: LaporanMasyarakat = serde_json::from_str(json).unwrap();

        let created = COLUMNS.iter().find(|c| c.id == "created_date").unwrap();
        assert_eq!(
            created.render(&laporan),
            Cell::text("3/7/2025").muted("Diupdate: 5/7/2025")
        );
        assert_eq!(COLUMNS[1].value(&laporan).as_deref(), Some(""));
    }
}
