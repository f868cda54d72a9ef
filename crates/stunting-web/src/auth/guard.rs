/// Route table and navigation guard
///
/// Every navigation is checked before its page renders. Public routes render
/// straight away; protected routes re-verify the cached token against the
/// profile endpoint and then check the caller's role against the route.

use stunting_common::types::Role;

use super::session::Session;
use super::ProfileVerifier;

pub const DEFAULT_TITLE: &str = "Stunting Web";
pub const LOGIN_PATH: &str = "/auth/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMeta {
    pub path: &'static str,
    pub title: Option<&'static str>,
    pub requires_auth: bool,
    /// Empty means any signed-in role
    pub allowed_roles: &'static [Role],
}

impl RouteMeta {
    const fn public(path: &'static str, title: Option<&'static str>) -> Self {
        Self {
            path,
            title,
            requires_auth: false,
            allowed_roles: &[],
        }
    }

    const fn admin(path: &'static str, title: &'static str) -> Self {
        Self {
            path,
            title: Some(title),
            requires_auth: true,
            allowed_roles: &[Role::Admin],
        }
    }

    const fn community(path: &'static str, title: &'static str) -> Self {
        Self {
            path,
            title: Some(title),
            requires_auth: true,
            allowed_roles: &[Role::Masyarakat],
        }
    }

    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles.is_empty() || self.allowed_roles.contains(&role)
    }

    pub fn title(&self) -> &'static str {
        self.title.unwrap_or(DEFAULT_TITLE)
    }
}

pub static ROUTES: &[RouteMeta] = &[
    RouteMeta::public("/", None),
    RouteMeta::public("/report", Some("Report")),
    RouteMeta::public("/logout", Some("Logout")),
    RouteMeta::public("/auth/login", Some("Login")),
    RouteMeta::public("/auth/register", Some("Register")),
    RouteMeta::admin("/admin/peta", "Admin - Peta"),
    RouteMeta::admin("/admin/keluarga", "Admin - Keluarga"),
    RouteMeta::admin("/admin/balita", "Admin - Balita"),
    RouteMeta::admin("/admin/laporan-masyarakat", "Admin - Laporan Masyarakat"),
    RouteMeta::admin("/admin/intervensi", "Admin - Intervensi"),
    RouteMeta::admin("/admin/riwayat-pemeriksaan", "Admin - Riwayat Pemeriksaan"),
    RouteMeta::admin("/admin/petugas-kesehatan", "Admin - Petugas Kesehatan"),
    RouteMeta::admin("/admin/skpd", "Admin - SKPD"),
    RouteMeta::community("/community/keluarga", "Community - Keluarga"),
    RouteMeta::community("/community/balita", "Community - Balita"),
    RouteMeta::community("/community/laporan-masyarakat", "Community - Laporan Masyarakat"),
];

/// Section roots that forward to their first page
pub fn index_redirect(path: &str) -> Option<&'static str> {
    match path.trim_end_matches('/') {
        "/auth" => Some(LOGIN_PATH),
        "/admin" => Some("/admin/keluarga"),
        "/community" => Some("/community/keluarga"),
        _ => None,
    }
}

pub fn route_meta(path: &str) -> Option<&'static RouteMeta> {
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    ROUTES.iter().find(|route| route.path == path)
}

pub fn title_for(path: &str) -> &'static str {
    route_meta(path).map_or(DEFAULT_TITLE, RouteMeta::title)
}

/// Login page URL that returns to `full_path` afterwards
pub fn login_redirect(full_path: &str) -> String {
    format!("{}?redirect={}", LOGIN_PATH, urlencoding::encode(full_path))
}

/// Where to go after login, taken from the `redirect` query parameter
pub fn redirect_target(query: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "redirect")
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|value| value.into_owned())
        .filter(|target| target.starts_with('/') && !target.starts_with("//"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Render,
    Redirect(String),
}

fn landing(role: Option<Role>) -> Decision {
    Decision::Redirect(role.map_or("/", |r| r.landing_path()).to_string())
}

/// Decide what a navigation to `full_path` (path plus query) leads to
pub async fn check<V>(full_path: &str, session: &Session, verifier: &V) -> Decision
where
    V: ProfileVerifier + ?Sized,
{
    let path = full_path.split(['?', '#']).next().unwrap_or("/");

    if let Some(target) = index_redirect(path) {
        return Decision::Redirect(target.to_string());
    }

    let meta = match route_meta(path) {
        Some(meta) => meta,
        None => return Decision::Redirect("/".to_string()),
    };

    if !meta.requires_auth {
        if path.starts_with("/auth") && session.is_authenticated() {
            log::info!("Already authenticated, redirecting to landing page");
            return landing(session.role());
        }
        return Decision::Render;
    }

    let token = match session.token() {
        Some(token) => token,
        None => {
            log::info!("No token found, redirecting to login");
            return Decision::Redirect(login_redirect(full_path));
        }
    };

    match verifier.verify(&token).await {
        Ok(profile) => {
            if let Err(e) = session.store_profile(&profile) {
                log::warn!("Could not refresh cached profile: {}", e);
            }
            if meta.allows(profile.role) {
                Decision::Render
            } else {
                log::info!("Role {} not allowed on {}", profile.role, meta.path);
                landing(Some(profile.role))
            }
        }
        Err(e) => {
            log::error!("Token verification failed: {}", e);
            session.clear();
            Decision::Redirect(login_redirect(full_path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::tests::profile;
    use crate::auth::session::MemoryStore;
    use async_trait::async_trait;
    use std::cell::Cell;
    use stunting_common::types::UserProfile;
    use stunting_common::{Result, StuntingError};

    struct FakeVerifier {
        role: Option<Role>,
        calls: Cell<usize>,
    }

    impl FakeVerifier {
        fn accepting(role: Role) -> Self {
            Self {
                role: Some(role),
                calls: Cell::new(0),
            }
        }

        fn rejecting() -> Self {
            Self {
                role: None,
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl ProfileVerifier for FakeVerifier {
        async fn verify(&self, _token: &str) -> Result<UserProfile> {
            self.calls.set(self.calls.get() + 1);
            match self.role {
                Some(role) => Ok(profile(role)),
                None => Err(StuntingError::auth("Invalid or expired token")),
            }
        }
    }

    fn signed_in(role: Role) -> Session {
        let session = Session::new(MemoryStore::default());
        session.store_token("token").unwrap();
        session.store_profile(&profile(role)).unwrap();
        session
    }

    #[tokio::test]
    async fn test_public_route_renders_without_verification() {
        let session = Session::new(MemoryStore::default());
        let verifier = FakeVerifier::rejecting();

        assert_eq!(check("/", &session, &verifier).await, Decision::Render);
        assert_eq!(check("/report", &session, &verifier).await, Decision::Render);
        assert_eq!(check("/auth/login", &session, &verifier).await, Decision::Render);
        assert_eq!(verifier.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_missing_token_redirects_to_login_with_return_path() {
        let session = Session::new(MemoryStore::default());
        let verifier = FakeVerifier::accepting(Role::Admin);

        let decision = check("/admin/balita?page=2", &session, &verifier).await;
        assert_eq!(
            decision,
            Decision::Redirect("/auth/login?redirect=%2Fadmin%2Fbalita%3Fpage%3D2".to_string())
        );
        assert_eq!(verifier.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_wrong_role_goes_to_its_landing_page() {
        let session = signed_in(Role::Masyarakat);
        let verifier = FakeVerifier::accepting(Role::Masyarakat);

        let decision = check("/admin/keluarga", &session, &verifier).await;
        assert_eq!(decision, Decision::Redirect("/community".to_string()));
    }

    #[tokio::test]
    async fn test_allowed_role_renders_and_refreshes_profile() {
        let session = Session::new(MemoryStore::default());
        session.store_token("token").unwrap();
        let verifier = FakeVerifier::accepting(Role::Admin);

        assert_eq!(check("/admin/skpd", &session, &verifier).await, Decision::Render);
        assert_eq!(session.role(), Some(Role::Admin));
    }

    #[tokio::test]
    async fn test_failed_verification_clears_credentials() {
        let session = signed_in(Role::Admin);
        let verifier = FakeVerifier::rejecting();

        let decision = check("/admin/skpd", &session, &verifier).await;
        assert_eq!(
            decision,
            Decision::Redirect("/auth/login?redirect=%2Fadmin%2Fskpd".to_string())
        );
        assert!(session.token().is_none());
        assert!(session.profile().is_none());
    }

    #[tokio::test]
    async fn test_auth_pages_bounce_signed_in_users() {
        let verifier = FakeVerifier::rejecting();

        let admin = signed_in(Role::Admin);
        assert_eq!(
            check("/auth/register", &admin, &verifier).await,
            Decision::Redirect("/admin".to_string())
        );

        let officer = signed_in(Role::PetugasKesehatan);
        assert_eq!(
            check("/auth/login", &officer, &verifier).await,
            Decision::Redirect("/petugas".to_string())
        );
    }

    #[tokio::test]
    async fn test_index_and_unknown_redirects() {
        let session = Session::new(MemoryStore::default());
        let verifier = FakeVerifier::rejecting();

        assert_eq!(
            check("/admin", &session, &verifier).await,
            Decision::Redirect("/admin/keluarga".to_string())
        );
        assert_eq!(
            check("/auth/", &session, &verifier).await,
            Decision::Redirect("/auth/login".to_string())
        );
        assert_eq!(
            check("/community", &session, &verifier).await,
            Decision::Redirect("/community/keluarga".to_string())
        );
        assert_eq!(
            check("/does/not/exist", &session, &verifier).await,
            Decision::Redirect("/".to_string())
        );
    }

    #[test]
    fn test_titles() {
        assert_eq!(title_for("/"), "Stunting Web");
        assert_eq!(title_for("/admin/skpd"), "Admin - SKPD");
        assert_eq!(title_for("/nowhere"), "Stunting Web");
    }

    #[test]
    fn test_redirect_target_parsing() {
        assert_eq!(
            redirect_target("?redirect=%2Fadmin%2Fbalita%3Fpage%3D2").as_deref(),
            Some("/admin/balita?page=2")
        );
        assert_eq!(redirect_target("foo=bar"), None);
        // only same-site paths are followed
        assert_eq!(redirect_target("redirect=https%3A%2F%2Fevil.example"), None);
        assert_eq!(redirect_target("redirect=%2F%2Fevil.example"), None);
    }
}
