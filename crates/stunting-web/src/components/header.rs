/// Header component with navigation and user menu

use leptos::*;
use leptos_router::*;

use crate::auth::use_auth;

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let signed_in = move || auth.profile.get().is_some();

    view! {
        <header class="bg-white border-b border-gray-200 shadow-sm">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="text-xl font-bold text-gray-900">
                        "Stunting Web"
                    </A>

                    <div class="flex items-center space-x-4">
                        <NavLink href="/" label="Peta" active=Signal::derive(move || location.pathname.get() == "/")/>
                        <NavLink
                            href="/report"
                            label="Report"
                            active=Signal::derive(move || location.pathname.get().starts_with("/report"))
                        />

                        <Show
                            when=signed_in
                            fallback=|| view! {
                                <A href="/auth/login" class="text-sm font-medium text-blue-600 hover:text-blue-800">
                                    "Login"
                                </A>
                            }
                        >
                            <UserMenu/>
                        </Show>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
fn NavLink(href: &'static str, label: &'static str, active: Signal<bool>) -> impl IntoView {
    view! {
        <A
            href=href
            class=move || format!(
                "px-3 py-2 text-sm font-medium transition-colors {}",
                if active.get() {
                    "text-blue-600 border-b-2 border-blue-600"
                } else {
                    "text-gray-600 hover:text-gray-900"
                }
            )
        >
            {label}
        </A>
    }
}

#[component]
fn UserMenu() -> impl IntoView {
    let auth = use_auth();
    let (show_menu, set_show_menu) = create_signal(false);

    let session = auth.session.clone();
    let name = move || {
        auth.profile.track();
        session.display_name()
    };
    let session = auth.session.clone();
    let email = move || {
        auth.profile.track();
        session.display_email()
    };
    let role = move || auth.profile.get().map(|p| p.role.to_string()).unwrap_or_default();
    let initial = {
        let name = name.clone();
        move || name().chars().next().unwrap_or('U').to_uppercase().to_string()
    };

    view! {
        <div class="relative">
            <button
                on:click=move |_| set_show_menu.update(|show| *show = !*show)
                class="flex items-center space-x-2 p-2 rounded-lg hover:bg-gray-100 transition-colors"
            >
                <div class="w-8 h-8 bg-blue-600 rounded-full flex items-center justify-center">
                    <span class="text-white text-sm font-medium">{initial}</span>
                </div>
            </button>

            <Show when=move || show_menu.get()>
                <div class="absolute right-0 mt-2 w-64 bg-white rounded-lg shadow-lg border border-gray-200 z-50">
                    <div class="p-4 border-b border-gray-200">
                        <p class="font-medium text-gray-900">{name.clone()}</p>
                        <p class="text-sm text-gray-600">{email.clone()}</p>
                        <p class="text-xs text-gray-500 mt-1">"Role: " {role}</p>
                    </div>

                    <div class="p-2" on:click=move |_| set_show_menu.set(false)>
                        <A
                            href="/logout"
                            class="block w-full text-left px-3 py-2 text-sm text-red-600 hover:bg-red-50 rounded transition-colors"
                        >
                            "Logout"
                        </A>
                    </div>
                </div>
            </Show>

            <Show when=move || show_menu.get()>
                <div class="fixed inset-0 z-40" on:click=move |_| set_show_menu.set(false)></div>
            </Show>
        </div>
    }
}
