/// Card component

use leptos::*;

/// White panel with an optional heading
#[component]
pub fn Card(
    #[prop(optional, into)]
    title: Option<String>,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("bg-white rounded-lg border border-gray-200 p-4 {}", class)>
            {title.map(|title| view! {
                <h2 class="text-lg font-semibold text-gray-900 mb-3">{title}</h2>
            })}
            {children()}
        </div>
    }
}
