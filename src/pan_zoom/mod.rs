// src/pan_zoom/mod.rs
//! Pan/zoom behavior attached to an embedded `<svg>`.
//!
//! The embed manager only needs two things from a pan/zoom implementation:
//! attach it to an element with some options, and destroy what was attached.
//! [`PanZoom`] captures that, with one implementation per [`PanZoomBackend`].

mod js;
mod native;
mod transform;

pub use js::{SvgPanZoom, SvgPanZoomHandle};
pub use native::{NativeHandle, NativePanZoom};
pub use transform::ViewTransform;

use crate::config::PanZoomBackend;
use crate::error::EmbedError;
use serde::{Deserialize, Serialize};
use web_sys::Element;

/// Options understood by both backends. Field names follow `svg-pan-zoom` so
/// the struct can be handed to the library as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanZoomOptions {
    pub zoom_enabled: bool,
    pub control_icons_enabled: bool,
    pub fit: bool,
    pub center: bool,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub zoom_scale_sensitivity: f64,
}

impl Default for PanZoomOptions {
    fn default() -> Self {
        Self {
            zoom_enabled: true,
            control_icons_enabled: true,
            fit: true,
            center: true,
            min_zoom: 0.5,
            max_zoom: 10.0,
            zoom_scale_sensitivity: 0.2,
        }
    }
}

/// Something that can give an element pan/zoom interaction.
pub trait PanZoom {
    type Handle: PanZoomHandle;

    fn attach(
        &self,
        element: &Element,
        options: &PanZoomOptions,
    ) -> Result<Self::Handle, EmbedError>;
}

/// A live pan/zoom instance. Destroying it detaches every listener and
/// decoration it added.
pub trait PanZoomHandle {
    fn destroy(self);
}

/// Backend picked at runtime from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnyPanZoom {
    backend: PanZoomBackend,
}

pub enum AnyHandle {
    SvgPanZoom(SvgPanZoomHandle),
    Native(NativeHandle),
}

impl AnyPanZoom {
    pub fn new(backend: PanZoomBackend) -> Self {
        Self { backend }
    }
}

impl PanZoom for AnyPanZoom {
    type Handle = AnyHandle;

    fn attach(
        &self,
        element: &Element,
        options: &PanZoomOptions,
    ) -> Result<AnyHandle, EmbedError> {
        match self.backend {
            PanZoomBackend::SvgPanZoom => SvgPanZoom
                .attach(element, options)
                .map(AnyHandle::SvgPanZoom),
            PanZoomBackend::Native => NativePanZoom
                .attach(element, options)
                .map(AnyHandle::Native),
        }
    }
}

impl PanZoomHandle for AnyHandle {
    fn destroy(self) {
        match self {
            AnyHandle::SvgPanZoom(handle) => handle.destroy(),
            AnyHandle::Native(handle) => handle.destroy(),
        }
    }
}
