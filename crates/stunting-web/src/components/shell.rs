/// Shell component that wraps the admin and community layouts
///
/// Header on top, section navigation on the left, page content and footer.

use leptos::*;

use crate::api::entities::Scope;
use crate::components::{footer::Footer, header::Header, sidebar::Sidebar};

#[component]
pub fn Shell(scope: Scope, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col">
            <Header/>

            <div class="flex flex-1">
                <Sidebar scope=scope/>

                <main class="flex-1 overflow-hidden">
                    <div class="h-full overflow-y-auto">
                        <div class="container mx-auto px-4 py-6 max-w-7xl">
                            {children()}
                        </div>
                    </div>
                </main>
            </div>

            <Footer/>
        </div>
    }
}
