/// Root component and routing
///
/// Every navigation goes through [`guard::check`] before the matched page is
/// shown. The admin and community sections share the shell layout.

use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use stunting_common::config::ClientConfig;
use stunting_common::entities::{
    Balita, Intervensi, Keluarga, LaporanMasyarakat, PetugasKesehatan, RiwayatPemeriksaan, Skpd,
};

use crate::api::auth::HttpAuthApi;
use crate::api::entities::Scope;
use crate::auth::{guard, use_auth, AuthProvider, Decision, Session};
use crate::components::notifications::NotificationProvider;
use crate::components::shell::Shell;
use crate::pages::{
    auth::{LoginPage, LogoutPage, RegisterPage},
    editor::EditorPage,
    entities::entity_page,
    report::ReportPage,
    viewer::ViewerPage,
};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<ClientConfig>().unwrap_or_default();
    let api = Rc::new(HttpAuthApi::new(config.api_base_url));

    view! {
        <Meta name="description" content="Peta dan data pemantauan stunting"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1.0"/>

        <Router>
            <AuthProvider session=Session::browser() api=api>
                <NotificationProvider>
                    <RouteGuard>
                        <Routes>
                            <Route path="/" view=ViewerPage/>
                            <Route path="/report" view=ReportPage/>
                            <Route path="/logout" view=LogoutPage/>
                            <Route path="/auth/login" view=LoginPage/>
                            <Route path="/auth/register" view=RegisterPage/>

                            <Route path="/admin" view=|| view! { <Shell scope=Scope::Admin><Outlet/></Shell> }>
                                <Route path="peta" view=EditorPage/>
                                <Route path="keluarga" view={|| entity_page::<Keluarga>(Scope::Admin)}/>
                                <Route path="balita" view={|| entity_page::<Balita>(Scope::Admin)}/>
                                <Route
                                    path="laporan-masyarakat"
                                    view={|| entity_page::<LaporanMasyarakat>(Scope::Admin)}
                                />
                                <Route path="intervensi" view={|| entity_page::<Intervensi>(Scope::Admin)}/>
                                <Route
                                    path="riwayat-pemeriksaan"
                                    view={|| entity_page::<RiwayatPemeriksaan>(Scope::Admin)}
                                />
                                <Route
                                    path="petugas-kesehatan"
                                    view={|| entity_page::<PetugasKesehatan>(Scope::Admin)}
                                />
                                <Route path="skpd" view={|| entity_page::<Skpd>(Scope::Admin)}/>
                                <Route path="" view=|| ()/>
                            </Route>

                            <Route
                                path="/community"
                                view=|| view! { <Shell scope=Scope::Community><Outlet/></Shell> }
                            >
                                <Route path="keluarga" view={|| entity_page::<Keluarga>(Scope::Community)}/>
                                <Route path="balita" view={|| entity_page::<Balita>(Scope::Community)}/>
                                <Route
                                    path="laporan-masyarakat"
                                    view={|| entity_page::<LaporanMasyarakat>(Scope::Community)}
                                />
                                <Route path="" view=|| ()/>
                            </Route>

                            // unknown paths are redirected by the guard
                            <Route path="/*any" view=|| ()/>
                        </Routes>
                    </RouteGuard>
                </NotificationProvider>
            </AuthProvider>
        </Router>
    }
}

/// Holds back the routed page until the guard has cleared the current path
#[component]
fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let location = use_location();

    let (cleared, set_cleared) = create_signal::<Option<String>>(None);
    let full_path = move || format!("{}{}", location.pathname.get(), location.search.get());

    create_effect(move |_| {
        let target = full_path();
        let auth = auth.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let decision = guard::check(&target, &auth.session, &*auth.api).await;
            auth.sync();
            match decision {
                Decision::Render => set_cleared.set(Some(target)),
                Decision::Redirect(to) => {
                    log::debug!("Redirecting {} to {}", target, to);
                    navigate(
                        &to,
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
            }
        });
    });

    let title = move || guard::title_for(&location.pathname.get()).to_string();
    let ready = move || cleared.with(|path| path.as_deref() == Some(full_path().as_str()));

    view! {
        <Title text=title/>
        <Show when=ready>{children()}</Show>
    }
}
