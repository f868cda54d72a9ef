/// Authentication pages (login, register, logout)

use leptos::*;
use leptos_router::*;
use stunting_common::types::{LoginRequest, RegisterRequest};

use crate::auth::{self, guard, use_auth};
use crate::components::notifications::use_notifications;
use crate::utils::validation::{validate_login, validate_register};

const INPUT_CLASS: &str = "mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm bg-white text-gray-900 placeholder-gray-500 focus:outline-none focus:ring-blue-500 focus:border-blue-500";
const SUBMIT_CLASS: &str = "group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500 disabled:opacity-50 disabled:cursor-not-allowed transition-colors";

#[component]
fn FormError(message: ReadSignal<Option<String>>, title: &'static str) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class="bg-red-50 border border-red-200 rounded-md p-4">
                <h3 class="text-sm font-medium text-red-800">{title}</h3>
                <div class="mt-2 text-sm text-red-700">
                    {move || message.get().unwrap_or_default()}
                </div>
            </div>
        </Show>
    }
}

#[component]
fn Field(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")]
    kind: &'static str,
    #[prop(optional)]
    autocomplete: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-gray-700">
                {label}
            </label>
            <input
                id=id
                name=id
                type=kind
                autocomplete=autocomplete
                class=INPUT_CLASS
                prop:value=value
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let location = use_location();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error_message, set_error_message) = create_signal::<Option<String>>(None);

    let login = create_action({
        let auth = auth.clone();
        move |request: &LoginRequest| {
            let auth = auth.clone();
            let request = request.clone();
            async move {
                auth::login(&*auth.api, &auth.session, &request)
                    .await
                    .map(|profile| profile.role)
                    .map_err(|e| e.to_string())
            }
        }
    });

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest {
            email: email.get().trim().to_string(),
            password: password.get(),
        };
        match validate_login(&request) {
            Ok(()) => {
                set_error_message.set(None);
                login.dispatch(request);
            }
            Err(e) => set_error_message.set(Some(e.message)),
        }
    };

    create_effect(move |_| match login.value().get() {
        Some(Ok(role)) => {
            auth.sync();
            let target = guard::redirect_target(&location.search.get_untracked())
                .unwrap_or_else(|| role.landing_path().to_string());
            navigate(&target, Default::default());
        }
        Some(Err(e)) => set_error_message.set(Some(e)),
        None => {}
    });

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div class="text-center">
                    <h2 class="mt-6 text-3xl font-extrabold text-gray-900">"Masuk"</h2>
                    <p class="mt-2 text-sm text-gray-600">"Sistem pemantauan stunting"</p>
                </div>

                <form class="mt-8 space-y-6" on:submit=handle_submit>
                    <div class="space-y-4">
                        <Field id="email" label="Email" kind="email" autocomplete="email" value=email set_value=set_email/>
                        <Field
                            id="password"
                            label="Password"
                            kind="password"
                            autocomplete="current-password"
                            value=password
                            set_value=set_password
                        />
                    </div>

                    <FormError message=error_message title="Login gagal"/>

                    <button type="submit" disabled=move || login.pending().get() class=SUBMIT_CLASS>
                        {move || if login.pending().get() { "Memproses..." } else { "Masuk" }}
                    </button>

                    <p class="text-center text-sm text-gray-600">
                        "Belum punya akun? "
                        <A href="/auth/register" class="font-medium text-blue-600 hover:text-blue-500">
                            "Daftar"
                        </A>
                    </p>
                </form>
            </div>
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let notifications = use_notifications();
    let navigate = use_navigate();

    let (nama, set_nama) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (alamat, set_alamat) = create_signal(String::new());
    let (error_message, set_error_message) = create_signal::<Option<String>>(None);

    let register = create_action(move |request: &RegisterRequest| {
        let api = auth.api.clone();
        let request = request.clone();
        async move { auth::register(&*api, &request).await.map_err(|e| e.to_string()) }
    });

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let request = RegisterRequest {
            email: email.get().trim().to_string(),
            nama: nama.get().trim().to_string(),
            password: password.get(),
            alamat: alamat.get().trim().to_string(),
        };
        match validate_register(&request) {
            Ok(()) => {
                set_error_message.set(None);
                register.dispatch(request);
            }
            Err(e) => set_error_message.set(Some(e.message)),
        }
    };

    create_effect(move |_| match register.value().get() {
        Some(Ok(())) => {
            notifications.show_success.call((
                "Registrasi berhasil".to_string(),
                Some("Silakan login dengan akun baru".to_string()),
            ));
            navigate(guard::LOGIN_PATH, Default::default());
        }
        Some(Err(e)) => set_error_message.set(Some(e)),
        None => {}
    });

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div class="text-center">
                    <h2 class="mt-6 text-3xl font-extrabold text-gray-900">"Daftar"</h2>
                    <p class="mt-2 text-sm text-gray-600">"Buat akun masyarakat"</p>
                </div>

                <form class="mt-8 space-y-6" on:submit=handle_submit>
                    <div class="space-y-4">
                        <Field id="nama" label="Nama" autocomplete="name" value=nama set_value=set_nama/>
                        <Field id="email" label="Email" kind="email" autocomplete="email" value=email set_value=set_email/>
                        <Field
                            id="password"
                            label="Password"
                            kind="password"
                            autocomplete="new-password"
                            value=password
                            set_value=set_password
                        />
                        <Field id="alamat" label="Alamat" autocomplete="street-address" value=alamat set_value=set_alamat/>
                    </div>

                    <FormError message=error_message title="Registrasi gagal"/>

                    <button type="submit" disabled=move || register.pending().get() class=SUBMIT_CLASS>
                        {move || if register.pending().get() { "Memproses..." } else { "Daftar" }}
                    </button>

                    <p class="text-center text-sm text-gray-600">
                        "Sudah punya akun? "
                        <A href=guard::LOGIN_PATH class="font-medium text-blue-600 hover:text-blue-500">
                            "Masuk"
                        </A>
                    </p>
                </form>
            </div>
        </div>
    }
}

#[component]
pub fn LogoutPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    spawn_local(async move {
        auth::logout(&*auth.api, &auth.session).await;
        auth.sync();
        navigate(guard::LOGIN_PATH, Default::default());
    });

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <p class="text-gray-600">"Keluar..."</p>
        </div>
    }
}
