//! Fetches SVG documents, embeds them into the page and attaches pan/zoom,
//! either inline or inside a modal dialog.

pub mod components;
pub mod config;
pub mod embed;
pub mod error;
pub mod pan_zoom;
pub mod source;
pub mod svg_markup;
pub mod utils;

pub use config::{EmbedConfig, GalleryItem, GalleryManifest, PanZoomBackend};
pub use embed::{EmbedManager, EmbedState, ModalDialog};
pub use error::EmbedError;
pub use pan_zoom::{AnyPanZoom, PanZoom, PanZoomHandle, PanZoomOptions};
pub use source::{HttpSource, SvgSource};

/// The manager as the page uses it: HTTP fetches, backend picked by config.
pub type PageEmbedManager = EmbedManager<HttpSource, AnyPanZoom>;
