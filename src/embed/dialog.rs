// src/embed/dialog.rs
use crate::error::EmbedError;
use gloo::timers::callback::Timeout;
use gloo_events::EventListener;
use gloo_utils::document;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlDialogElement};

/// Fired on the dialog once it is open and laid out.
pub const SHOWN_EVENT: &str = "shown";

/// A `<dialog>` element with show/hide and a `shown` lifecycle event.
#[derive(Debug, Clone)]
pub struct ModalDialog {
    element: HtmlDialogElement,
}

impl ModalDialog {
    pub fn find(id: &str) -> Result<Self, EmbedError> {
        let element = document()
            .get_element_by_id(id)
            .ok_or_else(|| EmbedError::MissingElement(format!("#{}", id)))?;
        let element = element
            .dyn_into::<HtmlDialogElement>()
            .map_err(|_| EmbedError::Dom(format!("#{} is not a <dialog>", id)))?;
        Ok(Self { element })
    }

    pub fn is_open(&self) -> bool {
        self.element.open()
    }

    /// Open the dialog modally, then fire [`SHOWN_EVENT`] on the next tick so
    /// listeners run against a visible dialog. Showing an open dialog only
    /// re-fires the event.
    pub fn show(&self) -> Result<(), EmbedError> {
        if !self.element.open() {
            self.element
                .show_modal()
                .map_err(|e| EmbedError::dom("opening dialog", e))?;
        }
        let element = self.element.clone();
        Timeout::new(0, move || {
            if let Ok(event) = Event::new(SHOWN_EVENT) {
                let _ = element.dispatch_event(&event);
            }
        })
        .forget();
        Ok(())
    }

    pub fn hide(&self) {
        self.element.close();
    }

    pub fn on_shown<F>(&self, mut callback: F) -> EventListener
    where
        F: FnMut() + 'static,
    {
        EventListener::new(&self.element, SHOWN_EVENT, move |_| callback())
    }
}
