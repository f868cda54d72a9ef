use stunting_common::entities::Balita;

use super::{format_date, region_cell, Cell, ColumnSpec, Span, Tabular};
use crate::api::entities::Resource;

fn name(b: &Balita) -> Cell {
    Cell::strong(&b.nama).muted(b.sex_label())
}

fn birth_date(b: &Balita) -> Cell {
    Cell::text(format_date(&b.tanggal_lahir)).muted(&b.umur)
}

fn parents(b: &Balita) -> Cell {
    Cell(vec![
        Span::Strong(format!("Ayah: {}", b.nama_ayah)),
        Span::Strong(format!("Ibu: {}", b.nama_ibu)),
        Span::Mono(b.nomor_kk.clone()),
    ])
}

fn birth_measurements(b: &Balita) -> Cell {
    Cell(vec![
        Span::Text(format!("{} gram", b.berat_lahir)),
        Span::Text(format!("{} cm", b.tinggi_lahir)),
    ])
}

pub static COLUMNS: &[ColumnSpec<Balita>] = &[
    ColumnSpec::sortable("nama", "Nama Balita", |b: &Balita| b.nama.clone(), name),
    ColumnSpec::sortable(
        "tanggal_lahir",
        "Tanggal Lahir",
        |b: &Balita| b.tanggal_lahir.clone(),
        birth_date,
    ),
    ColumnSpec::plain(
        "keluarga",
        "Orang Tua",
        |b: &Balita| format!("{} {} {}", b.nama_ayah, b.nama_ibu, b.nomor_kk),
        parents,
    ),
    ColumnSpec::plain(
        "berat_tinggi_lahir",
        "Data Lahir",
        |b: &Balita| format!("{} {}", b.berat_lahir, b.tinggi_lahir),
        birth_measurements,
    ),
    ColumnSpec::plain(
        "wilayah",
        "Wilayah",
        |b: &Balita| format!("{} {}", b.kelurahan, b.kecamatan),
        |b: &Balita| region_cell(&b.kelurahan, &b.kecamatan),
    ),
    ColumnSpec::sortable(
        "created_date",
        "Tanggal Dibuat",
        |b: &Balita| b.created_date.clone(),
        |b: &Balita| Cell::text(format_date(&b.created_date)),
    ),
    ColumnSpec::actions(),
];

impl Tabular for Balita {
    const RESOURCE: Resource = Resource::Balita;

    fn columns() -> &'static [ColumnSpec<Self>] {
        COLUMNS
    }

    fn describe(&self) -> String {
        format!("Balita: {} • {}", self.nama, self.sex_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::TableState;

    fn balita(id: &str, nama: &str, ayah: &str) -> Balita {
        Balita {
            id: id.to_string(),
            id_keluarga: "k1".to_string(),
            nomor_kk: "3274010101010001".to_string(),
            nama_ayah: ayah.to_string(),
            nama_ibu: "Aisyah".to_string(),
            nama: nama.to_string(),
            tanggal_lahir: "2023-02-14".to_string(),
            jenis_kelamin: "P".to_string(),
            berat_lahir: "3100".to_string(),
            tinggi_lahir: "49".to_string(),
            umur: "2 tahun".to_string(),
            kelurahan: "Kesambi".to_string(),
            kecamatan: "Kesambi".to_string(),
            created_date: "2025-07-01".to_string(),
            updated_date: None,
        }
    }

    #[test]
    fn test_filter_reaches_parent_names() {
        let rows = vec![balita("b1", "Nur", "Ahmad"), balita("b2", "Putri", "Joko")];
        let state = TableState {
            filter: "joko".to_string(),
            ..Default::default()
        };

        let view = state.apply(COLUMNS, &rows);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "b2");
    }

    #[test]
    fn test_cells() {
        let b = balita("b1", "Nur", "Ahmad");
        assert_eq!(COLUMNS[0].render(&b), Cell::strong("Nur").muted("Perempuan"));
        assert_eq!(
            COLUMNS[1].render(&b),
            Cell::text("14/2/2023").muted("2 tahun")
        );
        assert_eq!(
            COLUMNS[3].render(&b).0[0],
            Span::Text("3100 gram".to_string())
        );
    }
}
