use stunting_common::entities::RiwayatPemeriksaan;

use super::intervensi::jenis_tone;
use super::{capitalize, created_cell, format_date, region_cell, Cell, ColumnSpec, Span, Tabular, Tone};
use crate::api::entities::Resource;

pub fn status_gizi_tone(status: &str) -> Tone {
    match status.to_lowercase().as_str() {
        "normal" => Tone::Green,
        "stunting" | "gizi buruk" => Tone::Red,
        _ => Tone::Gray,
    }
}

pub fn jenis_laporan_tone(jenis: &str) -> Tone {
    match jenis.to_lowercase().as_str() {
        "masyarakat" => Tone::Blue,
        "admin" => Tone::Orange,
        _ => Tone::Gray,
    }
}

fn sex_label(jenis_kelamin: &str) -> &'static str {
    if jenis_kelamin == "L" {
        "Laki-laki"
    } else {
        "Perempuan"
    }
}

fn balita_info(r: &RiwayatPemeriksaan) -> Cell {
    let kk: String = r.nomor_kk.chars().take(12).collect();
    Cell::strong(&r.nama_balita)
        .muted(format!("{} • {}", r.umur_balita, sex_label(&r.jenis_kelamin)))
        .muted(format!("KK: {}...", kk))
}

fn examined(r: &RiwayatPemeriksaan) -> Cell {
    let cell = Cell::strong(format_date(&r.tanggal));
    if r.tanggal_intervensi.is_empty() {
        cell
    } else {
        cell.muted(format!("Intervensi: {}", format_date(&r.tanggal_intervensi)))
    }
}

fn result(r: &RiwayatPemeriksaan) -> Cell {
    Cell(vec![
        Span::Text(format!("BB: {} kg", r.berat_badan)),
        Span::Text(format!("TB: {} cm", r.tinggi_badan)),
        Span::Badge(capitalize(&r.status_gizi), status_gizi_tone(&r.status_gizi)),
    ])
}

fn intervention(r: &RiwayatPemeriksaan) -> Cell {
    Cell::badge(capitalize(&r.jenis_intervensi), jenis_tone(&r.jenis_intervensi))
        .muted(format!("ID: {}", r.id_intervensi))
}

fn report(r: &RiwayatPemeriksaan) -> Cell {
    let cell = Cell::badge(capitalize(&r.jenis_laporan), jenis_laporan_tone(&r.jenis_laporan))
        .muted(&r.status_laporan);
    if r.tanggal_laporan.is_empty() {
        cell
    } else {
        cell.muted(format_date(&r.tanggal_laporan))
    }
}

fn created(r: &RiwayatPemeriksaan) -> Cell {
    let cell = created_cell(&r.created_date, r.updated_date.as_deref(), "Update: ");
    match &r.created_by {
        Some(by) if !by.is_empty() => cell.muted(format!("by {}", by)),
        _ => cell,
    }
}

pub static COLUMNS: &[ColumnSpec<RiwayatPemeriksaan>] = &[
    ColumnSpec::plain(
        "balita_info",
        "Data Balita",
        |r: &RiwayatPemeriksaan| format!("{} {} {}", r.nama_balita, r.umur_balita, r.nomor_kk),
        balita_info,
    ),
    ColumnSpec::sortable(
        "tanggal",
        "Tanggal Periksa",
        |r: &RiwayatPemeriksaan| r.tanggal.clone(),
        examined,
    ),
    ColumnSpec::plain(
        "hasil_pemeriksaan",
        "Hasil Pemeriksaan",
        |r: &RiwayatPemeriksaan| format!("{} {} {}", r.berat_badan, r.tinggi_badan, r.status_gizi),
        result,
    ),
    ColumnSpec::plain(
        "intervensi_info",
        "Info Intervensi",
        |r: &RiwayatPemeriksaan| r.jenis_intervensi.clone(),
        intervention,
    ),
    ColumnSpec::plain(
        "laporan_info",
        "Info Laporan",
        |r: &RiwayatPemeriksaan| format!("{} {}", r.jenis_laporan, r.status_laporan),
        report,
    ),
    ColumnSpec::plain(
        "wilayah",
        "Wilayah",
        |r: &RiwayatPemeriksaan| format!("{} {}", r.kelurahan, r.kecamatan),
        |r: &RiwayatPemeriksaan| region_cell(&r.kelurahan, &r.kecamatan),
    ),
    ColumnSpec::sortable(
        "created_date",
        "Dibuat",
        |r: &RiwayatPemeriksaan| r.created_date.clone(),
        created,
    ),
    ColumnSpec::actions(),
];

impl Tabular for RiwayatPemeriksaan {
    const RESOURCE: Resource = Resource::RiwayatPemeriksaan;

    fn columns() -> &'static [ColumnSpec<Self>] {
        COLUMNS
    }

    fn describe(&self) -> String {
        format!("Balita: {} • {}", self.nama_balita, self.status_gizi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::TableState;

    fn riwayat(id: &str, status_gizi: &str) -> RiwayatPemeriksaan {
        let json = serde_json::json!({
            "id": id,
            "id_balita": "b1",
            "nama_balita": "Nur",
            "umur_balita": "2 tahun",
            "jenis_kelamin": "L",
            "nomor_kk": "3274010101010001",
            "jenis_intervensi": "gizi",
            "id_intervensi": "i1",
            "tanggal_intervensi": "2025-07-01",
            "jenis_laporan": "masyarakat",
            "status_laporan": "Sudah ditindaklanjuti",
            "tanggal": "2025-07-20",
            "berat_badan": "11.2",
            "tinggi_badan": "82",
            "status_gizi": status_gizi,
            "kelurahan": "Kesambi",
            "kecamatan": "Kesambi",
            "created_date": "2025-07-20"
        });
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_tones() {
        assert_eq!(status_gizi_tone("Normal"), Tone::Green);
        assert_eq!(status_gizi_tone("gizi buruk"), Tone::Red);
        assert_eq!(status_gizi_tone("stunting"), Tone::Red);
        assert_eq!(jenis_laporan_tone("admin"), Tone::Orange);
        assert_eq!(jenis_laporan_tone("masyarakat"), Tone::Blue);
    }

    #[test]
    fn test_cells() {
        let r = riwayat("r1", "stunting");
        assert_eq!(
            COLUMNS[0].render(&r),
            Cell::strong("Nur")
                .muted("2 tahun • Laki-laki")
                .muted("KK: 327401010101...")
        );
        assert_eq!(
            COLUMNS[1].render(&r),
            Cell::strong("20/7/2025").muted("Intervensi: 1/7/2025")
        );
        assert_eq!(
            COLUMNS[2].render(&r).0[2],
            Span::Badge("Stunting".to_string(), Tone::Red)
        );
    }

    #[test]
    fn test_filter_on_nutrition_status() {
        let rows = vec![riwayat("r1", "normal"), riwayat("r2", "gizi buruk")];
        let state = TableState {
            filter: "Gizi Buruk".to_string(),
            ..Default::default()
        };
        let view = state.apply(COLUMNS, &rows);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "r2");
    }
}
