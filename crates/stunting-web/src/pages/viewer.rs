/// Public map page
///
/// City boundary plus the configured dataset. Clicking a feature shows its
/// properties in the side panel.

use std::rc::Rc;

use geojson::Feature;
use leptos::*;
use stunting_common::config::ClientConfig;
use stunting_map::loader::{load_boundary, load_overlay};
use stunting_map::table::selected_html;
use stunting_map::OverlaySpec;

use crate::api::geojson::HttpGeoJsonSource;
use crate::api::use_api_client;
use crate::components::card::Card;
use crate::components::header::Header;
use crate::components::map_view::MapView;
use crate::leaflet::LeafletMap;

#[component]
pub fn ViewerPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let source = HttpGeoJsonSource::new(use_api_client());
    let (selected, set_selected) = create_signal::<Option<Feature>>(None);

    let on_ready = move |map: Rc<LeafletMap>| {
        map.on_select(move |feature| set_selected.set(feature));

        let source = source.clone();
        let resources = config.resources.clone();
        let spec = OverlaySpec::viewer(config.map.marker_icon.as_deref());
        spawn_local(async move {
            load_boundary(&source, &*map, &resources.boundary).await;
            load_overlay(&source, &*map, &resources.viewer, "Data", &spec).await;
        });
    };

    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col">
            <Header/>
            <div class="flex flex-1 flex-col lg:flex-row gap-4 p-4">
                <div class="flex-1 rounded-lg overflow-hidden border border-gray-200">
                    <MapView class="h-[75vh]" on_ready=Callback::new(on_ready)/>
                </div>
                <Card title="Detail" class="lg:w-96 overflow-auto max-h-[75vh]">
                    <div
                        class="text-sm [&_table]:w-full [&_th]:text-left [&_th]:pr-2"
                        inner_html=move || selected.with(|feature| selected_html(feature.as_ref()))
                    ></div>
                </Card>
            </div>
        </div>
    }
}
