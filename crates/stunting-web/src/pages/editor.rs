/// Admin map editor
///
/// Loads the dataset into a [`MarkerEditor`] and lets the admin place and
/// remove markers. The summary table below the map is re-rendered after
/// every change. Clicking a loaded feature shows its properties in the
/// detail panel. Nothing is saved back to the server from here.

use std::cell::RefCell;
use std::rc::Rc;

use geojson::{Feature, FeatureCollection};
use leptos::*;
use stunting_common::config::ClientConfig;
use stunting_map::loader::{load_boundary, load_editable};
use stunting_map::table::{selected_html, PropertyTable};
use stunting_map::{MarkerEditor, OverlaySpec};

use crate::api::geojson::HttpGeoJsonSource;
use crate::api::use_api_client;
use crate::components::card::Card;
use crate::components::map_view::MapView;
use crate::leaflet::LeafletMap;

type SharedEditor = Rc<RefCell<Option<MarkerEditor>>>;

fn empty_collection() -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: Vec::new(),
        foreign_members: None,
    }
}

fn enable_editing(map: &LeafletMap, editor: SharedEditor, set_table: WriteSignal<PropertyTable>) {
    let on_create = {
        let editor = Rc::clone(&editor);
        move |lng: f64, lat: f64| {
            let mut slot = editor.borrow_mut();
            let editor = slot.get_or_insert_with(|| MarkerEditor::new(empty_collection()));
            let placed = editor.place_marker(lng, lat);
            set_table.set(editor.table());
            placed
        }
    };

    let on_remove = move |id: Option<String>, lng: f64, lat: f64| {
        let mut slot = editor.borrow_mut();
        let Some(editor) = slot.as_mut() else {
            return;
        };
        let removed = match id {
            Some(id) => usize::from(editor.remove(&id)),
            None => editor.remove_at(lng, lat),
        };
        log::debug!("removed {} feature(s), {} left", removed, editor.len());
        set_table.set(editor.table());
    };

    if let Err(e) = map.enable_editing(on_create, on_remove) {
        log::error!("{}", e);
    }
}

#[component]
pub fn EditorPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let source = HttpGeoJsonSource::new(use_api_client());
    let (table, set_table) = create_signal(PropertyTable::default());
    let (selected, set_selected) = create_signal::<Option<Feature>>(None);

    let on_ready = move |map: Rc<LeafletMap>| {
        map.on_select(move |feature| set_selected.set(feature));

        let source = source.clone();
        let resources = config.resources.clone();
        spawn_local(async move {
            load_boundary(&source, &*map, &resources.boundary).await;

            let editor: SharedEditor = Rc::new(RefCell::new(None));
            if let Some(loaded) =
                load_editable(&source, &*map, &resources.viewer, &OverlaySpec::field_reports()).await
            {
                set_table.set(loaded.table());
                *editor.borrow_mut() = Some(loaded);
            }

            enable_editing(&map, editor, set_table);
        });
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-gray-900">"Peta"</h1>
                <p class="mt-1 text-sm text-gray-600">
                    "Tambah atau hapus marker langsung di peta"
                </p>
            </div>

            <div class="flex flex-col lg:flex-row gap-4">
                <div class="flex-1 rounded-lg overflow-hidden border border-gray-200">
                    <MapView class="h-[60vh]" on_ready=Callback::new(on_ready)/>
                </div>
                <Card title="Detail" class="lg:w-96 overflow-auto max-h-[60vh]">
                    <div
                        class="text-sm [&_table]:w-full [&_th]:text-left [&_th]:pr-2"
                        inner_html=move || selected.with(|feature| selected_html(feature.as_ref()))
                    ></div>
                </Card>
            </div>

            <Card title="Data">
                <p class="mb-2 text-sm text-gray-500">{move || format!("{} fitur", table.with(|t| t.rows.len()))}</p>
                <div
                    class="overflow-x-auto text-sm [&_table]:min-w-full [&_th]:text-left [&_th]:px-2 [&_td]:px-2"
                    inner_html=move || table.with(PropertyTable::to_html)
                ></div>
            </Card>
        </div>
    }
}
