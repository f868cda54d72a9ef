/// Confirmation modal for destructive actions

use leptos::*;

#[component]
pub fn ConfirmDialog(
    #[prop(into)]
    show: Signal<bool>,
    #[prop(into)]
    title: Signal<String>,
    /// Secondary line naming the record concerned
    #[prop(into)]
    detail: Signal<String>,
    #[prop(into)]
    busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || show.get()>
            <div class="fixed inset-0 z-[1050] overflow-y-auto">
                <div class="flex items-center justify-center min-h-screen p-4">
                    <div
                        class="fixed inset-0 bg-black bg-opacity-50 transition-opacity"
                        on:click=move |_| on_close.call(())
                    ></div>

                    <div class="relative bg-white rounded-lg shadow-xl max-w-md w-full p-6 space-y-4">
                        <h2 class="text-lg font-semibold text-gray-900">{title}</h2>
                        <p class="text-sm text-gray-600">{detail}</p>
                        <p class="text-sm text-red-600">"Data yang dihapus tidak dapat dikembalikan."</p>

                        <div class="flex justify-end space-x-3">
                            <button
                                class="px-4 py-2 border border-gray-300 rounded-md text-sm font-medium text-gray-700 bg-white hover:bg-gray-50"
                                on:click=move |_| on_close.call(())
                            >
                                "Batal"
                            </button>
                            <button
                                class="px-4 py-2 rounded-md text-sm font-medium text-white bg-red-600 hover:bg-red-700 disabled:opacity-50"
                                disabled=move || busy.get()
                                on:click=move |_| on_confirm.call(())
                            >
                                {move || if busy.get() { "Menghapus..." } else { "Hapus" }}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
