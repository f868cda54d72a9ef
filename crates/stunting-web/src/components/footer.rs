/// Application footer

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-white border-t border-gray-200 py-4">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between text-sm text-gray-600">
                    <div>{concat!("Stunting Web v", env!("CARGO_PKG_VERSION"))}</div>
                    <div>"Pemantauan stunting berbasis peta"</div>
                </div>
            </div>
        </footer>
    }
}
