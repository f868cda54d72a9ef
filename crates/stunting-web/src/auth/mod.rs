/// Authentication management for the web interface
///
/// Session cache, route guard, login/logout flows and the Leptos context that
/// exposes them to components.

pub mod guard;
pub mod session;

use std::rc::Rc;

use async_trait::async_trait;
use leptos::*;
use stunting_common::types::{LoginRequest, RegisterRequest, UserProfile};
use stunting_common::Result;

pub use guard::{Decision, RouteMeta};
pub use session::{LocalStorage, MemoryStore, Session, SessionStore};

/// Server-side check of a token, returning the current profile
#[async_trait(?Send)]
pub trait ProfileVerifier {
    async fn verify(&self, token: &str) -> Result<UserProfile>;
}

/// Authentication endpoints
#[async_trait(?Send)]
pub trait AuthApi: ProfileVerifier {
    /// Exchange credentials for a token
    async fn login(&self, request: &LoginRequest) -> Result<String>;

    async fn register(&self, request: &RegisterRequest) -> Result<()>;

    async fn logout(&self, token: &str) -> Result<()>;
}

/// Sign in, cache the token and the freshly fetched profile
pub async fn login<A>(api: &A, session: &Session, request: &LoginRequest) -> Result<UserProfile>
where
    A: AuthApi + ?Sized,
{
    let token = api.login(request).await?;
    session.store_token(&token)?;

    match api.verify(&token).await {
        Ok(profile) => {
            session.store_profile(&profile)?;
            log::info!("Signed in as {} ({})", profile.email, profile.role);
            Ok(profile)
        }
        Err(e) => {
            session.clear();
            Err(e)
        }
    }
}

pub async fn register<A>(api: &A, request: &RegisterRequest) -> Result<()>
where
    A: AuthApi + ?Sized,
{
    api.register(request).await?;
    log::info!("Registered {}", request.email);
    Ok(())
}

/// Tell the API, then clear local credentials whatever it answered
pub async fn logout<A>(api: &A, session: &Session)
where
    A: AuthApi + ?Sized,
{
    if let Some(token) = session.token() {
        if let Err(e) = api.logout(&token).await {
            log::warn!("Logout API failed, continuing with local cleanup: {}", e);
        }
    }
    session.clear();
}

/// Clear local credentials without calling the API
pub fn force_logout(session: &Session, reason: &str) {
    log::warn!("{}", reason);
    session.clear();
}

/// Authentication context shared through the component tree
#[derive(Clone)]
pub struct AuthContext {
    pub session: Session,
    pub api: Rc<dyn AuthApi>,
    /// Profile snapshot mirrored into a signal for the header and menus
    pub profile: ReadSignal<Option<UserProfile>>,
    pub set_profile: WriteSignal<Option<UserProfile>>,
}

impl AuthContext {
    /// Re-read the cached profile after the session changed
    pub fn sync(&self) {
        self.set_profile.set(self.session.profile());
    }
}

#[component]
pub fn AuthProvider(session: Session, api: Rc<dyn AuthApi>, children: Children) -> impl IntoView {
    let (profile, set_profile) = create_signal(session.profile());

    provide_context(AuthContext {
        session,
        api,
        profile,
        set_profile,
    });

    children()
}

/// Hook to access authentication context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext must be provided by AuthProvider")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use stunting_common::types::Role;
    use stunting_common::StuntingError;

    #[derive(Default)]
    struct FakeApi {
        fail_login: bool,
        fail_profile: bool,
        fail_logout: bool,
        logged_out: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl ProfileVerifier for FakeApi {
        async fn verify(&self, _token: &str) -> Result<UserProfile> {
            if self.fail_profile {
                return Err(StuntingError::http(401));
            }
            Ok(session::tests::profile(Role::Admin))
        }
    }

    #[async_trait(?Send)]
    impl AuthApi for FakeApi {
        async fn login(&self, _request: &LoginRequest) -> Result<String> {
            if self.fail_login {
                return Err(StuntingError::auth("Invalid email or password"));
            }
            Ok("jwt-token".to_string())
        }

        async fn register(&self, _request: &RegisterRequest) -> Result<()> {
            Ok(())
        }

        async fn logout(&self, token: &str) -> Result<()> {
            self.logged_out.borrow_mut().push(token.to_string());
            if self.fail_logout {
                return Err(StuntingError::network("offline"));
            }
            Ok(())
        }
    }

    fn credentials() -> LoginRequest {
        LoginRequest {
            email: "admin@example.com".to_string(),
            password: "secret".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_stores_token_and_profile() {
        let api = FakeApi::default();
        let session = Session::new(MemoryStore::default());

        let profile = login(&api, &session, &credentials()).await.unwrap();
        assert_eq!(profile.role, Role::Admin);
        assert_eq!(session.token().as_deref(), Some("jwt-token"));
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_failure_leaves_session_empty() {
        let session = Session::new(MemoryStore::default());

        let api = FakeApi {
            fail_login: true,
            ..Default::default()
        };
        assert!(login(&api, &session, &credentials()).await.is_err());
        assert!(session.token().is_none());

        let api = FakeApi {
            fail_profile: true,
            ..Default::default()
        };
        assert!(login(&api, &session, &credentials()).await.is_err());
        assert!(session.token().is_none());
    }

    #[tokio::test]
    async fn test_logout_always_clears() {
        let api = FakeApi {
            fail_logout: true,
            ..Default::default()
        };
        let session = Session::new(MemoryStore::default());
        session.store_token("jwt-token").unwrap();

        logout(&api, &session).await;
        assert_eq!(api.logged_out.borrow().as_slice(), ["jwt-token".to_string()]);
        assert!(session.token().is_none());
    }

    #[tokio::test]
    async fn test_logout_without_token_skips_api() {
        let api = FakeApi::default();
        let session = Session::new(MemoryStore::default());

        logout(&api, &session).await;
        assert!(api.logged_out.borrow().is_empty());
    }

    #[test]
    fn test_force_logout() {
        let session = Session::new(MemoryStore::default());
        session.store_token("jwt-token").unwrap();
        force_logout(&session, "Sesi berakhir, silakan login kembali");
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }
}
