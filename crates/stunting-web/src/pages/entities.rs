/// Admin and community table pages
///
/// One generic page per row type. The admin section can edit and delete;
/// the community section only lists.

use leptos::*;
use leptos_router::*;
use serde_json::Value;
use stunting_common::StuntingError;

use crate::api::entities::{self, Scope};
use crate::api::use_api_client;
use crate::auth::{force_logout, guard, use_auth};
use crate::columns::Tabular;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::data_table::DataTable;
use crate::components::notifications::use_notifications;
use crate::components::record_editor::RecordEditor;

/// Table page for one resource, called from the router with the row type
pub fn entity_page<T>(scope: Scope) -> impl IntoView
where
    T: Tabular,
{
    let auth = use_auth();
    let notifications = use_notifications();
    let navigate = use_navigate();
    let location = use_location();
    let client = use_api_client();
    let resource = T::RESOURCE;

    // Cached credentials the API refuses are dropped and the user sent to login
    let on_failure = move |e: &StuntingError| {
        log::error!("Error loading {}: {}", resource.label(), e);
        if e.invalidates_session() {
            force_logout(&auth.session, "Sesi berakhir, silakan login kembali");
            auth.sync();
            let here = format!("{}{}", location.pathname.get_untracked(), location.search.get_untracked());
            navigate(&guard::login_redirect(&here), Default::default());
        }
    };

    let rows = create_local_resource(|| (), {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            let on_failure = on_failure.clone();
            async move {
                entities::list::<T>(&client, resource, scope).await.map_err(|e| {
                    on_failure(&e);
                    e.to_string()
                })
            }
        }
    });
    let data = Signal::derive(move || rows.get().and_then(Result::ok).unwrap_or_default());

    let (pending_delete, set_pending_delete) = create_signal::<Option<T>>(None);
    let (editing, set_editing) = create_signal::<Option<(String, String)>>(None);

    let delete_action = create_action({
        let client = client.clone();
        move |id: &String| {
            let client = client.clone();
            let id = id.clone();
            async move { entities::delete(&client, resource, &id).await.map_err(|e| e.to_string()) }
        }
    });

    let update_action = create_action(move |record: &Value| {
        let client = client.clone();
        let record = record.clone();
        async move { entities::update(&client, resource, &record).await.map_err(|e| e.to_string()) }
    });

    create_effect(move |_| match delete_action.value().get() {
        Some(Ok(())) => {
            set_pending_delete.set(None);
            notifications
                .show_success
                .call(("Data berhasil dihapus".to_string(), None));
            rows.refetch();
        }
        Some(Err(e)) => notifications
            .show_error
            .call(("Gagal menghapus data".to_string(), Some(e))),
        None => {}
    });

    create_effect(move |_| match update_action.value().get() {
        Some(Ok(())) => {
            set_editing.set(None);
            notifications
                .show_success
                .call(("Data berhasil diperbarui".to_string(), None));
            rows.refetch();
        }
        Some(Err(e)) => notifications
            .show_error
            .call(("Gagal memperbarui data".to_string(), Some(e))),
        None => {}
    });

    let (on_edit, on_delete) = match scope {
        Scope::Admin => (
            Some(Callback::new(move |row: T| {
                match serde_json::to_string_pretty(&row) {
                    Ok(json) => set_editing.set(Some((row.id().to_string(), json))),
                    Err(e) => log::error!("Error serializing row {}: {}", row.id(), e),
                }
            })),
            Some(Callback::new(move |row: T| set_pending_delete.set(Some(row)))),
        ),
        Scope::Community => (None, None),
    };

    let status = move || match rows.get() {
        None => Some(view! { <p class="text-sm text-gray-500">"Memuat data..."</p> }.into_view()),
        Some(Err(e)) => Some(
            view! {
                <div class="bg-red-50 border border-red-200 rounded-md p-4">
                    <h3 class="text-sm font-medium text-red-800">"Gagal memuat data"</h3>
                    <p class="mt-1 text-sm text-red-700">{e}</p>
                </div>
            }
            .into_view(),
        ),
        Some(Ok(_)) => None,
    };

    view! {
        <div class="space-y-6">
            <div class="flex justify-between items-start">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">{resource.label()}</h1>
                    <p class="mt-1 text-sm text-gray-600">
                        {format!("Data {} ({})", resource.label(), scope.label())}
                    </p>
                </div>
                <button
                    class="inline-flex items-center px-4 py-2 border border-gray-300 rounded-md shadow-sm text-sm font-medium text-gray-700 bg-white hover:bg-gray-50"
                    on:click=move |_| rows.refetch()
                >
                    "Muat Ulang"
                </button>
            </div>

            {status}

            <DataTable rows=data on_edit=on_edit on_delete=on_delete/>

            <ConfirmDialog
                show=Signal::derive(move || pending_delete.with(Option::is_some))
                title=Signal::derive(move || format!("Hapus {}?", resource.label()))
                detail=Signal::derive(move || {
                    pending_delete.with(|row| row.as_ref().map(T::describe).unwrap_or_default())
                })
                busy=delete_action.pending()
                on_confirm=Callback::new(move |_| {
                    if let Some(row) = pending_delete.get_untracked() {
                        delete_action.dispatch(row.id().to_string());
                    }
                })
                on_close=Callback::new(move |_| set_pending_delete.set(None))
            />

            <RecordEditor
                record=editing
                busy=update_action.pending()
                on_save=Callback::new(move |record: Value| update_action.dispatch(record))
                on_close=Callback::new(move |_| set_editing.set(None))
            />
        </div>
    }
}
