use stunting_common::entities::Keluarga;

use super::{format_date, region_cell, Cell, ColumnSpec, Span, Tabular};
use crate::api::entities::Resource;

fn address(k: &Keluarga) -> Cell {
    Cell::text(&k.alamat).muted(format!("RT {}/RW {}", k.rt, k.rw))
}

fn coordinates(k: &Keluarga) -> Cell {
    let [lat, lng] = k.koordinat;
    Cell(vec![
        Span::Mono(format!("{:.6}", lng)),
        Span::Mono(format!("{:.6}", lat)),
    ])
}

pub static COLUMNS: &[ColumnSpec<Keluarga>] = &[
    ColumnSpec::sortable("nomor_kk", "Nomor KK", |k: &Keluarga| k.nomor_kk.clone(), |k: &Keluarga| {
        Cell::mono(&k.nomor_kk)
    }),
    ColumnSpec::sortable("nama_ayah", "Nama Ayah", |k: &Keluarga| k.nama_ayah.clone(), |k: &Keluarga| {
        Cell::strong(&k.nama_ayah)
    }),
    ColumnSpec::sortable("nama_ibu", "Nama Ibu", |k: &Keluarga| k.nama_ibu.clone(), |k: &Keluarga| {
        Cell::strong(&k.nama_ibu)
    }),
    ColumnSpec::plain("alamat", "Alamat", |k: &Keluarga| k.alamat.clone(), address),
    ColumnSpec::plain("kelurahan", "Wilayah", |k: &Keluarga| k.kelurahan.clone(), |k: &Keluarga| {
        region_cell(&k.kelurahan, &k.kecamatan)
    }),
    ColumnSpec::plain(
        "koordinat",
        "Koordinat",
        |k: &Keluarga| format!("{} {}", k.koordinat[0], k.koordinat[1]),
        coordinates,
    ),
    ColumnSpec::sortable("created_date", "Dibuat", |k: &Keluarga| k.created_date.clone(), |k: &Keluarga| {
        Cell::text(format_date(&k.created_date))
    }),
    ColumnSpec::actions(),
];

impl Tabular for Keluarga {
    const RESOURCE: Resource = Resource::Keluarga;

    fn columns() -> &'static [ColumnSpec<Self>] {
        COLUMNS
    }

    fn describe(&self) -> String {
        format!("KK {} • {} & {}", self.nomor_kk, self.nama_ayah, self.nama_ibu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keluarga() -> Keluarga {
        Keluarga {
            id: "k1".to_string(),
            nomor_kk: "3274010101010001".to_string(),
            nama_ayah: "Ahmad".to_string(),
            nama_ibu: "Aisyah".to_string(),
            nik_ayah: String::new(),
            nik_ibu: String::new(),
            alamat: "Jl. Pemuda 10".to_string(),
            rt: "01".to_string(),
            rw: "02".to_string(),
            id_kelurahan: String::new(),
            kelurahan: "Kesambi".to_string(),
            kecamatan: "Kesambi".to_string(),
            koordinat: [-6.7261, 108.5391],
            created_date: "2025-07-01T00:00:00Z".to_string(),
            updated_date: None,
        }
    }

    fn column(id: &str) -> &'static ColumnSpec<Keluarga> {
        COLUMNS.iter().find(|c| c.id == id).unwrap()
    }

    #[test]
    fn test_coordinates_show_longitude_first() {
        let cell = column("koordinat").render(&keluarga());
        assert_eq!(
            cell.0,
            vec![
                Span::Mono("108.539100".to_string()),
                Span::Mono("-6.726100".to_string())
            ]
        );
    }

    #[test]
    fn test_address_and_date_cells() {
        let k = keluarga();
        assert_eq!(
            column("alamat").render(&k).0[1],
            Span::Muted("RT 01/RW 02".to_string())
        );
        assert_eq!(column("created_date").render(&k), Cell::text("1/7/2025"));
    }
}
