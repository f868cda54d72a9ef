/// GeoJSON-driven map rendering
///
/// Everything here is independent of the browser: overlays are rendered into
/// plain view models which a [`loader::MapSurface`] implementation hands to
/// the actual mapping library.

pub mod editor;
pub mod feature;
pub mod html;
pub mod loader;
pub mod overlay;
pub mod popup;
pub mod table;

pub use editor::{MarkerEditor, PlacedMarker};
pub use loader::{GeoJsonSource, MapSurface};
pub use overlay::{LayerStyle, MarkerIcon, OverlaySpec, RenderedOverlay, Symbology};
pub use popup::{Binding, PopupTemplate};
pub use table::PropertyTable;
