/// Section navigation
///
/// One link per resource the section lists; the admin section also links the
/// map editor.

use leptos::*;
use leptos_router::*;

use crate::api::entities::Scope;

#[component]
pub fn Sidebar(scope: Scope) -> impl IntoView {
    let location = use_location();

    let mut links: Vec<(String, &'static str)> = scope
        .resources()
        .iter()
        .map(|resource| (resource.route(scope), resource.label()))
        .collect();
    if scope == Scope::Admin {
        links.push(("/admin/peta".to_string(), "Peta"));
    }

    view! {
        <aside class="hidden lg:block w-64 bg-white border-r border-gray-200">
            <div class="h-full px-4 py-6">
                <h2 class="px-3 mb-3 text-xs font-semibold text-gray-500 uppercase tracking-wider">
                    {scope.label()}
                </h2>
                <nav class="space-y-1">
                    {links
                        .into_iter()
                        .map(|(href, label)| {
                            let target = href.clone();
                            let active = move || location.pathname.get().starts_with(&target);
                            view! {
                                <A
                                    href=href
                                    class=move || format!(
                                        "block px-3 py-2 rounded-md text-sm font-medium {}",
                                        if active() {
                                            "bg-blue-50 text-blue-700"
                                        } else {
                                            "text-gray-700 hover:bg-gray-100"
                                        }
                                    )
                                >
                                    {label}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </aside>
    }
}
