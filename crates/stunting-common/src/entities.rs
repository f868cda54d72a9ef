/// Row types returned by the admin and community list endpoints
///
/// Field names follow the API's JSON exactly. Dates are kept as the API's
/// strings; formatting happens at render time.

use serde::{Deserialize, Serialize};

/// Anything listed in an admin table
pub trait Record: Clone + PartialEq + 'static {
    fn id(&self) -> &str;
}

macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(impl Record for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

/// Household (keluarga)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keluarga {
    pub id: String,
    pub nomor_kk: String,
    pub nama_ayah: String,
    pub nama_ibu: String,
    #[serde(default)]
    pub nik_ayah: String,
    #[serde(default)]
    pub nik_ibu: String,
    pub alamat: String,
    #[serde(default)]
    pub rt: String,
    #[serde(default)]
    pub rw: String,
    #[serde(default)]
    pub id_kelurahan: String,
    pub kelurahan: String,
    pub kecamatan: String,
    /// `[lat, lng]` as stored by the API
    pub koordinat: [f64; 2],
    pub created_date: String,
    #[serde(default)]
    pub updated_date: Option<String>,
}

/// Toddler (balita)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balita {
    pub id: String,
    pub id_keluarga: String,
    pub nomor_kk: String,
    pub nama_ayah: String,
    pub nama_ibu: String,
    pub nama: String,
    pub tanggal_lahir: String,
    /// `"L"` or `"P"`
    pub jenis_kelamin: String,
    pub berat_lahir: String,
    pub tinggi_lahir: String,
    #[serde(default)]
    pub umur: String,
    pub kelurahan: String,
    pub kecamatan: String,
    pub created_date: String,
    #[serde(default)]
    pub updated_date: Option<String>,
}

impl Balita {
    pub fn sex_label(&self) -> &'static str {
        if self.jenis_kelamin == "L" {
            "Laki-laki"
        } else {
            "Perempuan"
        }
    }
}

/// Community report (laporan masyarakat)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaporanMasyarakat {
    pub id: String,
    #[serde(default)]
    pub id_masyarakat: String,
    pub id_balita: String,
    #[serde(default)]
    pub id_status_laporan: String,
    pub tanggal_laporan: String,
    pub hubungan_dengan_balita: String,
    pub nomor_hp_pelapor: String,
    #[serde(default)]
    pub nomor_hp_keluarga_balita: String,
    pub created_date: String,
    #[serde(default)]
    pub updated_date: Option<String>,
    #[serde(default)]
    pub nama_pelapor: String,
    #[serde(default)]
    pub email_pelapor: String,
    pub nama_balita: String,
    pub nama_ayah: String,
    pub nama_ibu: String,
    pub nomor_kk: String,
    pub alamat: String,
    pub kelurahan: String,
    pub kecamatan: String,
    pub status_laporan: String,
    #[serde(default)]
    pub jenis_laporan: String,
}

/// Intervention (intervensi)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intervensi {
    pub id: String,
    pub id_balita: String,
    pub nama_balita: String,
    /// `"gizi"`, `"kesehatan"` or `"sosial"`
    pub jenis: String,
    pub tanggal: String,
    pub deskripsi: String,
    pub hasil: String,
    pub petugas_count: u32,
    pub riwayat_count: u32,
    pub created_date: String,
    #[serde(default)]
    pub updated_date: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub updated_by: Option<String>,
}

/// Examination history (riwayat pemeriksaan)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiwayatPemeriksaan {
    pub id: String,
    pub id_balita: String,
    pub nama_balita: String,
    #[serde(default)]
    pub umur_balita: String,
    #[serde(default)]
    pub jenis_kelamin: String,
    #[serde(default)]
    pub nama_ayah: String,
    #[serde(default)]
    pub nama_ibu: String,
    #[serde(default)]
    pub nomor_kk: String,
    #[serde(default)]
    pub id_intervensi: String,
    #[serde(default)]
    pub jenis_intervensi: String,
    #[serde(default)]
    pub tanggal_intervensi: String,
    #[serde(default)]
    pub id_laporan_masyarakat: String,
    #[serde(default)]
    pub status_laporan: String,
    #[serde(default)]
    pub tanggal_laporan: String,
    /// `"masyarakat"` or `"admin"`
    #[serde(default)]
    pub jenis_laporan: String,
    pub tanggal: String,
    pub berat_badan: String,
    pub tinggi_badan: String,
    /// `"normal"`, `"stunting"` or `"gizi buruk"`
    pub status_gizi: String,
    #[serde(default)]
    pub keterangan: String,
    pub kelurahan: String,
    pub kecamatan: String,
    pub created_date: String,
    #[serde(default)]
    pub updated_date: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub updated_by: Option<String>,
}

/// Health officer (petugas kesehatan)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetugasKesehatan {
    pub id: String,
    #[serde(default)]
    pub id_pengguna: String,
    pub id_skpd: String,
    pub email: String,
    pub nama: String,
    pub skpd: String,
    /// `"puskesmas"`, `"kelurahan"` or `"skpd"`
    pub jenis_skpd: String,
    pub intervensi_count: u32,
    pub created_date: String,
    #[serde(default)]
    pub updated_date: Option<String>,
}

/// Agency (SKPD)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skpd {
    pub id: String,
    pub skpd: String,
    /// `"puskesmas"`, `"kelurahan"` or `"skpd"`
    pub jenis: String,
    pub petugas_count: u32,
    pub created_date: String,
    #[serde(default)]
    pub updated_date: Option<String>,
}

impl_record!(
    Keluarga,
    Balita,
    LaporanMasyarakat,
    Intervensi,
    RiwayatPemeriksaan,
    PetugasKesehatan,
    Skpd,
);

/// Staffing level derived from a linked-officer count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Staffing {
    Unstaffed,
    Active,
    Full,
}

impl Skpd {
    pub fn staffing(&self) -> Staffing {
        match self.petugas_count {
            0 => Staffing::Unstaffed,
            1..=3 => Staffing::Active,
            _ => Staffing::Full,
        }
    }

    pub fn staffing_key(&self) -> &'static str {
        match self.staffing() {
            Staffing::Unstaffed => "belum_ada_petugas",
            Staffing::Active => "aktif",
            Staffing::Full => "aktif_banyak",
        }
    }

    /// Why this agency cannot be deleted, if it cannot
    pub fn delete_blocker(&self) -> Option<String> {
        (self.petugas_count > 0).then(|| format!("Ada {} petugas terkait", self.petugas_count))
    }
}

impl Intervensi {
    pub fn staffing(&self) -> Staffing {
        match self.petugas_count {
            0 => Staffing::Unstaffed,
            1..=2 => Staffing::Active,
            _ => Staffing::Full,
        }
    }

    pub fn staffing_key(&self) -> &'static str {
        match self.staffing() {
            Staffing::Unstaffed => "belum_ada_petugas",
            Staffing::Active => "aktif",
            Staffing::Full => "tim_lengkap",
        }
    }

    pub fn delete_blocker(&self) -> Option<String> {
        (self.riwayat_count > 0 || self.petugas_count > 0).then(|| {
            format!(
                "Ada {} riwayat & {} petugas terkait",
                self.riwayat_count, self.petugas_count
            )
        })
    }
}

/// Workload derived from an officer's intervention count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
    Idle,
    Active,
    VeryActive,
}

impl PetugasKesehatan {
    pub fn workload(&self) -> Workload {
        match self.intervensi_count {
            0 => Workload::Idle,
            1..=5 => Workload::Active,
            _ => Workload::VeryActive,
        }
    }

    pub fn workload_key(&self) -> &'static str {
        match self.workload() {
            Workload::Idle => "belum_ada_intervensi",
            Workload::Active => "aktif",
            Workload::VeryActive => "sangat_aktif",
        }
    }

    pub fn delete_blocker(&self) -> Option<String> {
        (self.intervensi_count > 0)
            .then(|| format!("Ada {} intervensi terkait", self.intervensi_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skpd(petugas_count: u32) -> Skpd {
        Skpd {
            id: "s1".to_string(),
            skpd: "Puskesmas Kesambi".to_string(),
            jenis: "puskesmas".to_string(),
            petugas_count,
            created_date: "2025-07-01".to_string(),
            updated_date: None,
        }
    }

    fn intervensi(petugas_count: u32, riwayat_count: u32) -> Intervensi {
        Intervensi {
            id: "i1".to_string(),
            id_balita: "b1".to_string(),
            nama_balita: "Budi".to_string(),
            jenis: "gizi".to_string(),
            tanggal: "2025-07-10".to_string(),
            deskripsi: "PMT".to_string(),
            hasil: "Berat naik".to_string(),
            petugas_count,
            riwayat_count,
            created_date: "2025-07-10".to_string(),
            updated_date: None,
            created_by: None,
            updated_by: None,
        }
    }

    #[test]
    fn test_skpd_staffing_thresholds() {
        assert_eq!(skpd(0).staffing_key(), "belum_ada_petugas");
        assert_eq!(skpd(1).staffing_key(), "aktif");
        assert_eq!(skpd(3).staffing_key(), "aktif");
        assert_eq!(skpd(4).staffing_key(), "aktif_banyak");
    }

    #[test]
    fn test_intervensi_staffing_thresholds() {
        assert_eq!(intervensi(0, 0).staffing_key(), "belum_ada_petugas");
        assert_eq!(intervensi(2, 0).staffing_key(), "aktif");
        assert_eq!(intervensi(3, 0).staffing_key(), "tim_lengkap");
    }

    #[test]
    fn test_petugas_workload() {
        let mut petugas = PetugasKesehatan {
            id: "p1".to_string(),
            id_pengguna: "u1".to_string(),
            id_skpd: "s1".to_string(),
            email: "petugas@example.com".to_string(),
            nama: "Rina".to_string(),
            skpd: "Puskesmas Kesambi".to_string(),
            jenis_skpd: "puskesmas".to_string(),
            intervensi_count: 0,
            created_date: "2025-07-01".to_string(),
            updated_date: None,
        };
        assert_eq!(petugas.workload_key(), "belum_ada_intervensi");
        assert!(petugas.delete_blocker().is_none());

        petugas.intervensi_count = 5;
        assert_eq!(petugas.workload_key(), "aktif");
        petugas.intervensi_count = 6;
        assert_eq!(petugas.workload_key(), "sangat_aktif");
        assert_eq!(petugas.delete_blocker().unwrap(), "Ada 6 intervensi terkait");
    }

    #[test]
    fn test_delete_blockers() {
        assert!(skpd(0).delete_blocker().is_none());
        assert_eq!(skpd(2).delete_blocker().unwrap(), "Ada 2 petugas terkait");

        assert!(intervensi(0, 0).delete_blocker().is_none());
        assert!(intervensi(0, 1).delete_blocker().is_some());
        assert_eq!(
            intervensi(1, 4).delete_blocker().unwrap(),
            "Ada 4 riwayat & 1 petugas terkait"
        );
    }

    #[test]
    fn test_keluarga_deserialize() {
        let json = r#"{
            "id": "k1",
            "nomor_kk": "3274010101010001",
            "nama_ayah": "Ahmad",
            "nama_ibu": "Aisyah",
            "alamat": "Jl. Pemuda 10",
            "rt": "01",
            "rw": "02",
            "kelurahan": "Kesambi",
            "kecamatan": "Kesambi",
            "koordinat": [-6.7261, 108.5391],
            "created_date": "2025-07-01T00:00:00Z"
        }"#;

        let keluarga: Keluarga = serde_json::from_str(json).unwrap();
        assert_eq!(keluarga.id(), "k1");
        assert_eq!(keluarga.koordinat, [-6.7261, 108.5391]);
        assert!(keluarga.updated_date.is_none());
        assert!(keluarga.nik_ayah.is_empty());
    }
}
