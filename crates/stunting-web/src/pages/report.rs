/// Public report page
///
/// Every named collection from the report endpoint in a layer switcher, over
/// the city boundary and, when configured, the administrative areas.

use std::rc::Rc;

use leptos::*;
use stunting_common::config::ClientConfig;
use stunting_map::loader::{load_boundary, load_catalog, load_overlay};
use stunting_map::OverlaySpec;

use crate::api::geojson::HttpGeoJsonSource;
use crate::api::use_api_client;
use crate::components::header::Header;
use crate::components::map_view::MapView;
use crate::leaflet::LeafletMap;

#[component]
pub fn ReportPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let source = HttpGeoJsonSource::new(use_api_client());
    let (layers, set_layers) = create_signal::<Option<usize>>(None);

    let on_ready = move |map: Rc<LeafletMap>| {
        let source = source.clone();
        let resources = config.resources.clone();
        spawn_local(async move {
            load_boundary(&source, &*map, &resources.boundary).await;
            if let Some(areas) = &resources.areas {
                load_overlay(&source, &*map, areas, "Wilayah", &OverlaySpec::administrative()).await;
            }
            let count = load_catalog(
                &source,
                &*map,
                &resources.collections,
                &OverlaySpec::property_popups(),
            )
            .await;
            set_layers.set(Some(count));
        });
    };

    let status = move || match layers.get() {
        None => "Memuat data...".to_string(),
        Some(0) => "Tidak ada layer yang dapat ditampilkan".to_string(),
        Some(n) => format!("{} layer dimuat", n),
    };

    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col">
            <Header/>
            <div class="p-4 space-y-2">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold text-gray-900">"Report"</h1>
                    <span class="text-sm text-gray-600">{status}</span>
                </div>
                <div class="rounded-lg overflow-hidden border border-gray-200">
                    <MapView class="h-[80vh]" on_ready=Callback::new(on_ready)/>
                </div>
            </div>
        </div>
    }
}
