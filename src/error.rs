// src/error.rs
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong between a trigger click and an installed embed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EmbedError {
    /// The request never produced a response (network, CORS, bad URL).
    #[error("failed to fetch SVG: {0}")]
    Fetch(String),
    /// The server answered, but not with a 2xx status.
    #[error("fetching {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    /// The payload contains no top-level `<svg>` element.
    #[error("document contains no <svg> element")]
    NoSvg,
    /// The payload contains more than one top-level `<svg>` element.
    #[error("document contains {0} top-level <svg> elements, expected exactly one")]
    MultipleSvg(usize),
    /// The payload could not be scanned at all.
    #[error("unreadable SVG markup: {0}")]
    Markup(String),
    /// A required element of the page markup is not in the document.
    #[error("missing page element: {0}")]
    MissingElement(String),
    #[error("DOM error: {0}")]
    Dom(String),
    #[error("pan/zoom error: {0}")]
    PanZoom(String),
}

impl EmbedError {
    /// Wraps a JavaScript exception raised by a DOM call.
    pub fn dom(context: &str, value: JsValue) -> Self {
        EmbedError::Dom(format!("{}: {}", context, describe_js(&value)))
    }
}

impl From<gloo_net::Error> for EmbedError {
    fn from(err: gloo_net::Error) -> Self {
        EmbedError::Fetch(err.to_string())
    }
}

impl From<quick_xml::Error> for EmbedError {
    fn from(err: quick_xml::Error) -> Self {
        EmbedError::Markup(err.to_string())
    }
}

/// Best-effort text for a thrown JS value (`Error.message` or its string form).
pub(crate) fn describe_js(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
