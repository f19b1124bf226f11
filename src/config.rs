// src/config.rs
use crate::pan_zoom::PanZoomOptions;
use serde::{Deserialize, Serialize};

/// Identifiers of the page markup the embed manager works against, plus the
/// behavior switches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedConfig {
    /// Class carried by every trigger element.
    pub trigger_class: String,
    pub container_id: String,
    /// Id given to the installed `<svg>` element.
    pub embed_id: String,
    /// Element whose text holds the URL waiting for the dialog to open.
    pub holder_id: String,
    pub dialog_id: String,
    pub modal: bool,
    pub backend: PanZoomBackend,
    pub pan_zoom: PanZoomOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanZoomBackend {
    /// The `svg-pan-zoom` JavaScript library, loaded by the page.
    #[default]
    SvgPanZoom,
    /// Wheel/drag handling implemented in this crate.
    Native,
}

/// Contents of `gallery.json`: what the page offers to embed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryManifest {
    pub title: String,
    pub config: EmbedConfig,
    pub items: Vec<GalleryItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub label: String,
    pub url: String,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            trigger_class: String::from("svg-view"),
            container_id: String::from("svg-container"),
            embed_id: String::from("svg-doc"),
            holder_id: String::from("svg-url"),
            dialog_id: String::from("svg-modal"),
            modal: false,
            backend: PanZoomBackend::default(),
            pan_zoom: PanZoomOptions::default(),
        }
    }
}

impl Default for GalleryManifest {
    fn default() -> Self {
        Self {
            title: String::from("SVG viewer"),
            config: EmbedConfig::default(),
            items: Vec::new(),
        }
    }
}

impl EmbedConfig {
    pub fn modal(mut self, modal: bool) -> Self {
        self.modal = modal;
        self
    }

    pub fn with_backend(mut self, backend: PanZoomBackend) -> Self {
        self.backend = backend;
        self
    }

    /// CSS selector matching trigger elements.
    pub fn trigger_selector(&self) -> String {
        format!(".{}", self.trigger_class)
    }
}

impl GalleryManifest {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid gallery manifest: {}", e))
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl GalleryItem {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}
