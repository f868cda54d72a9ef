/// Generic admin table
///
/// Renders any [`Tabular`] row type from its column specification: global
/// filter, column visibility, sortable headers and per-row actions. Edit and
/// delete are handed back to the page through callbacks.

use leptos::*;
use stunting_common::entities::Record;

use crate::columns::{Cell, ColumnSpec, Header, SortDirection, Span, TableState, Tabular, Tone};
use crate::components::notifications::use_notifications;
use crate::leaflet::copy_to_clipboard;

const TH_CLASS: &str = "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider";

pub fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Default => "bg-gray-900 text-white",
        Tone::Secondary => "bg-gray-100 text-gray-900",
        Tone::Outline => "border border-gray-300 text-gray-700",
        Tone::Destructive => "bg-red-600 text-white",
        Tone::Green => "bg-green-100 text-green-800",
        Tone::Blue => "bg-blue-100 text-blue-800",
        Tone::Purple => "bg-purple-100 text-purple-800",
        Tone::Orange => "bg-orange-100 text-orange-800",
        Tone::Red => "bg-red-100 text-red-800",
        Tone::Gray => "bg-gray-100 text-gray-800",
    }
}

fn render_span(span: Span) -> View {
    match span {
        Span::Strong(text) => view! { <div class="text-sm font-medium text-gray-900">{text}</div> }.into_view(),
        Span::Text(text) => view! { <div class="text-sm text-gray-900">{text}</div> }.into_view(),
        Span::Muted(text) => view! { <div class="text-xs text-gray-500">{text}</div> }.into_view(),
        Span::Mono(text) => view! { <div class="font-mono text-xs text-gray-700">{text}</div> }.into_view(),
        Span::Badge(text, tone) => view! {
            <span class=format!("inline-flex px-2 py-1 text-xs font-semibold rounded-full {}", tone_class(tone))>
                {text}
            </span>
        }
        .into_view(),
    }
}

fn render_cell(cell: Cell) -> View {
    view! {
        <div class="space-y-1">
            {cell.0.into_iter().map(render_span).collect_view()}
        </div>
    }
    .into_view()
}

#[component]
pub fn DataTable<T>(
    rows: Signal<Vec<T>>,
    #[prop(default = None)]
    on_edit: Option<Callback<T>>,
    #[prop(default = None)]
    on_delete: Option<Callback<T>>,
) -> impl IntoView
where
    T: Tabular,
{
    let (state, set_state) = create_signal(TableState::default());
    let (show_columns, set_show_columns) = create_signal(false);

    let total = move || rows.with(Vec::len);
    let shown = move || {
        let state = state.get();
        rows.with(|rows| state.apply(T::columns(), rows).len())
    };

    let header = move || {
        let current = state.get();
        current
            .visible(T::columns())
            .into_iter()
            .map(|column| {
                view! { <ColumnHeader column=column direction=current.sort_direction(column.id) set_state=set_state/> }
            })
            .collect_view()
    };

    let body = move || {
        let current = state.get();
        let columns = current.visible(T::columns());
        let width = columns.len();
        rows.with(|rows| {
            let visible_rows = current.apply(T::columns(), rows);
            if visible_rows.is_empty() {
                return view! {
                    <tr>
                        <td colspan=width class="px-6 py-8 text-center text-sm text-gray-500">
                            "Tidak ada data."
                        </td>
                    </tr>
                }
                .into_view();
            }

            visible_rows
                .into_iter()
                .map(|row| {
                    let cells = columns
                        .iter()
                        .map(|column| {
                            if column.is_actions() {
                                view! {
                                    <td class="px-6 py-4 whitespace-nowrap text-right text-sm font-medium">
                                        <RowActions row=row.clone() on_edit=on_edit on_delete=on_delete/>
                                    </td>
                                }
                            } else {
                                view! {
                                    <td class="px-6 py-4 align-top">{render_cell(column.render(row))}</td>
                                }
                            }
                        })
                        .collect_view();
                    view! { <tr class="hover:bg-gray-50">{cells}</tr> }
                })
                .collect_view()
        })
    };

    let column_toggles = move || {
        T::columns()
            .iter()
            .filter(|column| column.is_hideable())
            .map(|column| {
                let id = column.id;
                view! {
                    <label class="flex items-center space-x-2 px-3 py-1 text-sm text-gray-700 hover:bg-gray-50">
                        <input
                            type="checkbox"
                            prop:checked=move || state.with(|s| s.is_visible(id))
                            on:change=move |_| set_state.update(|s| s.toggle_visibility(column))
                        />
                        <span>{column.header.label()}</span>
                    </label>
                }
            })
            .collect_view()
    };

    view! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <input
                    type="text"
                    class="w-full max-w-sm px-3 py-2 border border-gray-300 rounded-md shadow-sm bg-white text-gray-900 focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                    placeholder="Cari..."
                    prop:value=move || state.with(|s| s.filter.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_state.update(|s| s.filter = value);
                    }
                />

                <div class="relative">
                    <button
                        class="inline-flex items-center px-4 py-2 border border-gray-300 rounded-md shadow-sm text-sm font-medium text-gray-700 bg-white hover:bg-gray-50"
                        on:click=move |_| set_show_columns.update(|show| *show = !*show)
                    >
                        "Kolom"
                    </button>
                    <Show when=move || show_columns.get()>
                        <div class="absolute right-0 mt-2 w-56 bg-white rounded-lg shadow-lg border border-gray-200 z-50 py-2">
                            {column_toggles}
                        </div>
                    </Show>
                </div>
            </div>

            <div class="bg-white rounded-lg border border-gray-200 overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>{header}</tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        {body}
                    </tbody>
                </table>
            </div>

            <div class="text-sm text-gray-500">
                {move || format!("{} dari {} baris", shown(), total())}
            </div>
        </div>
    }
}

#[component]
fn ColumnHeader<T>(
    column: &'static ColumnSpec<T>,
    direction: Option<SortDirection>,
    set_state: WriteSignal<TableState>,
) -> impl IntoView
where
    T: 'static,
{
    match column.header {
        Header::Sortable(label) if column.is_sortable() => {
            let arrow = match direction {
                Some(SortDirection::Ascending) => " ↑",
                Some(SortDirection::Descending) => " ↓",
                None => " ↕",
            };
            view! {
                <th class=TH_CLASS>
                    <button
                        class="inline-flex items-center uppercase tracking-wider hover:text-gray-900"
                        on:click=move |_| set_state.update(|s| s.toggle_sort(column))
                    >
                        {label}
                        <span class="ml-1">{arrow}</span>
                    </button>
                </th>
            }
        }
        header => view! { <th class=TH_CLASS>{header.label()}</th> },
    }
}

#[component]
fn RowActions<T>(row: T, on_edit: Option<Callback<T>>, on_delete: Option<Callback<T>>) -> impl IntoView
where
    T: Tabular,
{
    let notifications = use_notifications();
    let blocker = row.delete_blocker();
    let id = row.id().to_string();

    let copy_id = move |_| {
        copy_to_clipboard(&id);
        notifications
            .show_info
            .call(("ID disalin".to_string(), Some(id.clone())));
    };

    let edit = on_edit.map(|on_edit| {
        let row = row.clone();
        view! {
            <button class="text-blue-600 hover:text-blue-900" on:click=move |_| on_edit.call(row.clone())>
                "Edit"
            </button>
        }
    });

    let delete = on_delete.map(|on_delete| match blocker {
        Some(reason) => view! {
            <div class="inline-flex flex-col items-end">
                <button class="text-gray-400 cursor-not-allowed" disabled=true>
                    "Tidak Bisa Dihapus"
                </button>
                <span class="text-xs text-orange-600">{format!("⚠️ {}", reason)}</span>
            </div>
        }
        .into_view(),
        None => {
            let row = row.clone();
            view! {
                <button class="text-red-600 hover:text-red-900" on:click=move |_| on_delete.call(row.clone())>
                    "Delete"
                </button>
            }
            .into_view()
        }
    });

    view! {
        <div class="flex justify-end items-start space-x-3">
            <button class="text-gray-600 hover:text-gray-900" on:click=copy_id>
                "Copy ID"
            </button>
            {edit}
            {delete}
        </div>
    }
}
