/// Admin and community entity endpoints

use serde::de::DeserializeOwned;
use stunting_common::entities::Record;
use stunting_common::types::{IdRequest, ListPayload};
use stunting_common::{Result, StuntingError};

use super::client::ApiClient;

/// Resources listed in the admin and community sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Keluarga,
    Balita,
    LaporanMasyarakat,
    Intervensi,
    RiwayatPemeriksaan,
    PetugasKesehatan,
    Skpd,
}

/// Which section's endpoints to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Admin,
    Community,
}

impl Scope {
    /// Resources this section lists
    pub fn resources(&self) -> &'static [Resource] {
        match self {
            Scope::Admin => &Resource::ALL,
            Scope::Community => &Resource::COMMUNITY,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Scope::Admin => "Admin",
            Scope::Community => "Community",
        }
    }
}

impl Resource {
    pub const ALL: [Resource; 7] = [
        Resource::Keluarga,
        Resource::Balita,
        Resource::LaporanMasyarakat,
        Resource::Intervensi,
        Resource::RiwayatPemeriksaan,
        Resource::PetugasKesehatan,
        Resource::Skpd,
    ];

    pub const COMMUNITY: [Resource; 3] = [
        Resource::Keluarga,
        Resource::Balita,
        Resource::LaporanMasyarakat,
    ];

    /// Path segment shared by routes and endpoints
    pub fn slug(&self) -> &'static str {
        match self {
            Resource::Keluarga => "keluarga",
            Resource::Balita => "balita",
            Resource::LaporanMasyarakat => "laporan-masyarakat",
            Resource::Intervensi => "intervensi",
            Resource::RiwayatPemeriksaan => "riwayat-pemeriksaan",
            Resource::PetugasKesehatan => "petugas-kesehatan",
            Resource::Skpd => "skpd",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Resource::Keluarga => "Keluarga",
            Resource::Balita => "Balita",
            Resource::LaporanMasyarakat => "Laporan Masyarakat",
            Resource::Intervensi => "Intervensi",
            Resource::RiwayatPemeriksaan => "Riwayat Pemeriksaan",
            Resource::PetugasKesehatan => "Petugas Kesehatan",
            Resource::Skpd => "SKPD",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.slug() == slug)
    }

    pub fn list_path(&self, scope: Scope) -> String {
        match (scope, self) {
            (Scope::Admin, r) => format!("/api/admin/{}/get", r.slug()),
            // the community API names its report resource `laporan`
            (Scope::Community, Resource::LaporanMasyarakat) => "/api/community/laporan/get".to_string(),
            (Scope::Community, r) => format!("/api/community/{}/get", r.slug()),
        }
    }

    pub fn delete_path(&self) -> String {
        format!("/api/admin/{}/delete", self.slug())
    }

    pub fn update_path(&self) -> String {
        format!("/api/admin/{}/update", self.slug())
    }

    pub fn route(&self, scope: Scope) -> String {
        match scope {
            Scope::Admin => format!("/admin/{}", self.slug()),
            Scope::Community => format!("/community/{}", self.slug()),
        }
    }
}

pub async fn list<T>(client: &ApiClient, resource: Resource, scope: Scope) -> Result<Vec<T>>
where
    T: Record + DeserializeOwned,
{
    let payload: ListPayload<T> = client.get(&resource.list_path(scope)).await?;
    log::debug!("Fetched {} {} rows", payload.data.len(), resource.label());
    Ok(payload.data)
}

/// Send an edited record; the API picks the fields it accepts
pub async fn update(client: &ApiClient, resource: Resource, record: &serde_json::Value) -> Result<()> {
    let id = record
        .get("id")
        .and_then(|id| id.as_str())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| StuntingError::parse("Record has no id"))?;
    client.post_unit(&resource.update_path(), record).await?;
    log::info!("Updated {} {}", resource.label(), id);
    Ok(())
}

pub async fn delete(client: &ApiClient, resource: Resource, id: &str) -> Result<()> {
    client
        .post_unit(&resource.delete_path(), &IdRequest { id: id.to_string() })
        .await?;
    log::info!("Deleted {} {}", resource.label(), id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(
            Resource::PetugasKesehatan.list_path(Scope::Admin),
            "/api/admin/petugas-kesehatan/get"
        );
        assert_eq!(Resource::Skpd.delete_path(), "/api/admin/skpd/delete");
        assert_eq!(
            Resource::LaporanMasyarakat.update_path(),
            "/api/admin/laporan-masyarakat/update"
        );
        assert_eq!(
            Resource::LaporanMasyarakat.list_path(Scope::Community),
            "/api/community/laporan/get"
        );
        assert_eq!(
            Resource::Balita.list_path(Scope::Community),
            "/api/community/balita/get"
        );
        assert_eq!(
            Resource::RiwayatPemeriksaan.route(Scope::Admin),
            "/admin/riwayat-pemeriksaan"
        );
    }

    #[test]
    fn test_slugs_round_trip() {
        for resource in Resource::ALL {
            assert_eq!(Resource::from_slug(resource.slug()), Some(resource));
        }
        assert_eq!(Resource::from_slug("users"), None);
    }

    #[test]
    fn test_every_section_page_has_a_route() {
        use crate::auth::guard::route_meta;
        use stunting_common::types::Role;

        for resource in Scope::Admin.resources() {
            let meta = route_meta(&resource.route(Scope::Admin)).unwrap();
            assert_eq!(meta.allowed_roles, &[Role::Admin]);
        }
        for resource in Scope::Community.resources() {
            let meta = route_meta(&resource.route(Scope::Community)).unwrap();
            assert_eq!(meta.allowed_roles, &[Role::Masyarakat]);
        }
        assert!(route_meta(&Resource::Skpd.route(Scope::Community)).is_none());
    }
}
