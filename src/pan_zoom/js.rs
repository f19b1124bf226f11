// src/pan_zoom/js.rs
use super::{PanZoom, PanZoomHandle, PanZoomOptions};
use crate::error::{describe_js, EmbedError};
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    /// Instance returned by the `svg-pan-zoom` library.
    pub type SvgPanZoomInstance;

    #[wasm_bindgen(catch, js_name = svgPanZoom)]
    fn svg_pan_zoom(element: &Element, options: &JsValue) -> Result<SvgPanZoomInstance, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn destroy(this: &SvgPanZoomInstance) -> Result<(), JsValue>;
}

/// Pan/zoom provided by the `svg-pan-zoom` script, which the page must load
/// before any embed is created.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgPanZoom;

pub struct SvgPanZoomHandle {
    instance: SvgPanZoomInstance,
}

impl PanZoom for SvgPanZoom {
    type Handle = SvgPanZoomHandle;

    fn attach(
        &self,
        element: &Element,
        options: &PanZoomOptions,
    ) -> Result<SvgPanZoomHandle, EmbedError> {
        let json =
            serde_json::to_string(options).map_err(|e| EmbedError::PanZoom(e.to_string()))?;
        let options =
            js_sys::JSON::parse(&json).map_err(|e| EmbedError::PanZoom(describe_js(&e)))?;
        let instance = svg_pan_zoom(element, &options)
            .map_err(|e| EmbedError::PanZoom(format!("svgPanZoom failed: {}", describe_js(&e))))?;
        Ok(SvgPanZoomHandle { instance })
    }
}

impl PanZoomHandle for SvgPanZoomHandle {
    fn destroy(self) {
        if let Err(e) = self.instance.destroy() {
            log::warn!("svgPanZoom destroy failed: {}", describe_js(&e));
        }
    }
}
