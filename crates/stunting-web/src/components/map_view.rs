/// Leaflet map container
///
/// Mounts a [`LeafletMap`] once the container element exists and hands it to
/// the page, which decides what to load onto it. The map is removed when the
/// component is disposed.

use std::rc::Rc;

use leptos::*;
use stunting_common::config::ClientConfig;

use crate::leaflet::LeafletMap;

#[component]
pub fn MapView(
    /// Extra classes; the container needs an explicit height
    #[prop(optional)]
    class: &'static str,
    on_ready: Callback<Rc<LeafletMap>>,
) -> impl IntoView {
    let view_config = use_context::<ClientConfig>().unwrap_or_default().map;
    let container = create_node_ref::<html::Div>();
    let mounted = store_value::<Option<Rc<LeafletMap>>>(None);

    container.on_load(move |element| match LeafletMap::mount(&element, &view_config) {
        Ok(map) => {
            let map = Rc::new(map);
            mounted.set_value(Some(Rc::clone(&map)));
            on_ready.call(map);
        }
        Err(e) => log::error!("{}", e),
    });

    view! {
        <div node_ref=container class=format!("w-full z-0 {}", class)></div>
    }
}
