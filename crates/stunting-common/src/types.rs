/// Type definitions shared by the front end and the static host
///
/// API envelope, authentication payloads and the cached user profile.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role as issued by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Masyarakat,
    #[serde(alias = "petugas kesehatan")]
    PetugasKesehatan,
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Masyarakat => "masyarakat",
            Role::PetugasKesehatan => "petugas_kesehatan",
            Role::Unknown => "unknown",
        }
    }

    /// Page a user of this role lands on after login or a refused navigation
    pub fn landing_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::PetugasKesehatan => "/petugas",
            Role::Masyarakat => "/community",
            Role::Unknown => "/",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response envelope used by every API endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn is_ok(&self) -> bool {
        self.status_code == 200
    }
}

/// Payload of the admin list endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPayload<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub total: usize,
}

/// Profile snapshot cached client-side under `user_data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nama: Option<String>,
    /// Role-specific detail record (`nama`, `alamat`, `id_skpd`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        self.data
            .as_ref()
            .and_then(|data| data.get("nama"))
            .and_then(|nama| nama.as_str())
            .map(str::to_string)
            .or_else(|| self.nama.clone())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "User".to_string())
    }

    pub fn display_email(&self) -> &str {
        if self.email.is_empty() {
            "user@example.com"
        } else {
            &self.email
        }
    }
}

/// `data` member of `GET /api/auth/profile`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileData {
    pub id: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl From<ProfileData> for UserProfile {
    fn from(profile: ProfileData) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            role: profile.role,
            nama: None,
            data: profile.data,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub nama: String,
    pub password: String,
    pub alamat: String,
}

/// Body of the delete endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdRequest {
    pub id: String,
}
