// src/embed/mod.rs
//! The embed manager: swaps fetched SVG documents into a container and keeps
//! exactly one pan/zoom instance alive on whatever is shown.

mod dialog;
mod state;

pub use dialog::{ModalDialog, SHOWN_EVENT};
pub use state::{EmbedState, LoadTicket, LoadTracker};

use crate::config::EmbedConfig;
use crate::error::EmbedError;
use crate::pan_zoom::{PanZoom, PanZoomHandle};
use crate::source::SvgSource;
use crate::svg_markup::extract_root_svg;
use gloo_events::{EventListener, EventListenerOptions};
use gloo_utils::document;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event};
use yew::Callback;

/// The SVG currently installed in the container.
struct Embed<H> {
    element: Element,
    handle: H,
    url: String,
}

struct Inner<H> {
    current: Option<Embed<H>>,
    state: EmbedState,
    loads: LoadTracker,
}

pub struct EmbedManager<S, P: PanZoom> {
    config: EmbedConfig,
    source: S,
    pan_zoom: P,
    inner: RefCell<Inner<P::Handle>>,
    listeners: RefCell<Vec<EventListener>>,
    on_change: Option<Callback<EmbedState>>,
}

impl<S, P> EmbedManager<S, P>
where
    S: SvgSource + 'static,
    P: PanZoom + 'static,
{
    pub fn new(config: EmbedConfig, source: S, pan_zoom: P) -> Self {
        Self {
            config,
            source,
            pan_zoom,
            inner: RefCell::new(Inner {
                current: None,
                state: EmbedState::Absent,
                loads: LoadTracker::default(),
            }),
            listeners: RefCell::new(Vec::new()),
            on_change: None,
        }
    }

    /// Report every state transition to `callback`.
    pub fn with_observer(mut self, callback: Callback<EmbedState>) -> Self {
        self.on_change = Some(callback);
        self
    }

    pub fn config(&self) -> &EmbedConfig {
        &self.config
    }

    pub fn state(&self) -> EmbedState {
        self.inner.borrow().state.clone()
    }

    /// URL of the installed embed, if any.
    pub fn current_url(&self) -> Option<String> {
        self.inner.borrow().current.as_ref().map(|e| e.url.clone())
    }

    /// Bind trigger clicks (and, in modal mode, the dialog's `shown` event).
    ///
    /// Clicks are delegated from the document, so triggers added after this
    /// call are handled too. Calling it again replaces the earlier bindings.
    pub fn initialize(self: &Rc<Self>) -> Result<(), EmbedError> {
        self.container()?;
        self.listeners.borrow_mut().clear();

        let dialog = if self.config.modal {
            self.holder()?;
            Some(ModalDialog::find(&self.config.dialog_id)?)
        } else {
            None
        };

        let selector = self.config.trigger_selector();
        let manager = Rc::downgrade(self);
        let click_dialog = dialog.clone();
        let on_click = EventListener::new_with_options(
            &document(),
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(trigger) = trigger_of(event, &selector) else {
                    return;
                };
                event.prevent_default();
                let Some(manager) = manager.upgrade() else {
                    return;
                };
                let Some(url) = trigger
                    .get_attribute("href")
                    .filter(|u| !u.trim().is_empty())
                else {
                    log::warn!("Trigger without a target URL ignored");
                    return;
                };
                match &click_dialog {
                    Some(dialog) => manager.request_in_modal(dialog, &url),
                    None => {
                        manager.remove_embed();
                        spawn_create(manager, url);
                    }
                }
            },
        );

        let mut listeners = vec![on_click];
        if let Some(dialog) = dialog {
            let manager = Rc::downgrade(self);
            listeners.push(dialog.on_shown(move || {
                if let Some(manager) = manager.upgrade() {
                    spawn_local(async move {
                        // every failure path of replace_svg_in_modal logs its own error
                        let _ = manager.replace_svg_in_modal().await;
                    });
                }
            }));
        }
        *self.listeners.borrow_mut() = listeners;

        log::info!(
            "Embed manager bound to {} ({} mode)",
            self.config.trigger_selector(),
            if self.config.modal { "modal" } else { "inline" }
        );
        Ok(())
    }

    /// Fetch `url` and install its root `<svg>` as the embed.
    ///
    /// If another load is requested before this one finishes, this one's
    /// response is dropped and the call returns `Ok(())`.
    pub async fn create_embed(&self, url: &str) -> Result<(), EmbedError> {
        let ticket = self.inner.borrow_mut().loads.issue();
        self.set_state(EmbedState::Loading {
            url: url.to_string(),
        });
        log::info!("Loading SVG from {}", url);

        let fetched = self.source.fetch_markup(url).await;

        if !self.inner.borrow().loads.is_current(ticket) {
            log::debug!("Discarding superseded response for {}", url);
            return Ok(());
        }

        let result = fetched.and_then(|markup| self.install(url, &markup));
        if let Err(error) = &result {
            log::error!("Failed to embed {}: {}", url, error);
            self.set_state(EmbedState::Failed {
                url: url.to_string(),
                error: error.clone(),
            });
        }
        result
    }

    /// Destroy the embed's pan/zoom instance and remove it from the page.
    /// Returns whether anything was removed.
    pub fn remove_embed(&self) -> bool {
        let removed = self.take_down();
        if removed && !self.inner.borrow().state.is_loading() {
            self.set_state(EmbedState::Absent);
        }
        removed
    }

    /// Replace the embed with the URL waiting in the holder element.
    pub async fn replace_svg_in_modal(&self) -> Result<(), EmbedError> {
        let holder = self.holder().map_err(|e| {
            log::error!("Cannot read the pending SVG URL: {}", e);
            e
        })?;
        let url = holder
            .text_content()
            .map(|t| t.trim().to_string())
            .unwrap_or_default();
        if url.is_empty() {
            log::warn!("Dialog shown with no pending SVG URL");
            return Ok(());
        }
        self.remove_embed();
        self.create_embed(&url).await
    }

    fn request_in_modal(&self, dialog: &ModalDialog, url: &str) {
        let holder = match self.holder() {
            Ok(holder) => holder,
            Err(e) => {
                log::error!("{}", e);
                return;
            }
        };
        holder.set_text_content(Some(url));
        if let Err(e) = dialog.show() {
            log::error!("{}", e);
        }
    }

    fn install(&self, url: &str, markup: &str) -> Result<(), EmbedError> {
        let svg = extract_root_svg(markup)?;
        let container = self.container()?;

        self.take_down();
        container.set_inner_html(svg);

        let element = container
            .query_selector("svg")
            .map_err(|e| EmbedError::dom("locating installed svg", e))?
            .ok_or(EmbedError::NoSvg)?;
        element
            .set_attribute("id", &self.config.embed_id)
            .map_err(|e| EmbedError::dom("setting svg id", e))?;
        element
            .set_attribute("width", "100%")
            .map_err(|e| EmbedError::dom("setting svg width", e))?;

        let handle = self.pan_zoom.attach(&element, &self.config.pan_zoom)?;
        self.inner.borrow_mut().current = Some(Embed {
            element,
            handle,
            url: url.to_string(),
        });
        self.set_state(EmbedState::Present {
            url: url.to_string(),
        });
        log::info!("Embedded {} as #{}", url, self.config.embed_id);
        Ok(())
    }

    /// Removal shared by every path; never fails when nothing is present.
    fn take_down(&self) -> bool {
        let current = self.inner.borrow_mut().current.take();
        log::debug!(
            "Current embed: {:?}",
            current.as_ref().map(|e| e.url.as_str())
        );
        match current {
            Some(embed) => {
                embed.handle.destroy();
                embed.element.remove();
                true
            }
            // an untracked element can be left behind when pan/zoom failed to attach
            None => match document().get_element_by_id(&self.config.embed_id) {
                Some(stray) => {
                    stray.remove();
                    true
                }
                None => false,
            },
        }
    }

    fn set_state(&self, state: EmbedState) {
        self.inner.borrow_mut().state = state.clone();
        if let Some(callback) = &self.on_change {
            callback.emit(state);
        }
    }

    fn container(&self) -> Result<Element, EmbedError> {
        find_element(&self.config.container_id)
    }

    fn holder(&self) -> Result<Element, EmbedError> {
        find_element(&self.config.holder_id)
    }
}

fn spawn_create<S, P>(manager: Rc<EmbedManager<S, P>>, url: String)
where
    S: SvgSource + 'static,
    P: PanZoom + 'static,
{
    spawn_local(async move {
        // failures are already logged and published by create_embed
        let _ = manager.create_embed(&url).await;
    });
}

fn find_element(id: &str) -> Result<Element, EmbedError> {
    document()
        .get_element_by_id(id)
        .ok_or_else(|| EmbedError::MissingElement(format!("#{}", id)))
}

/// The trigger element a click landed on, if any.
fn trigger_of(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}
