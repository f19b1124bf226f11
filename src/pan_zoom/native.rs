// src/pan_zoom/native.rs
use super::{PanZoom, PanZoomHandle, PanZoomOptions, ViewTransform};
use crate::error::EmbedError;
use gloo_events::{EventListener, EventListenerOptions};
use gloo_utils::document;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Element, HtmlElement, MouseEvent, SvgElement, WheelEvent};

pub const CONTROLS_CLASS: &str = "svg-pan-zoom-controls";

/// Pan/zoom implemented with plain DOM listeners and a CSS transform:
/// wheel zooms around the cursor, dragging pans, and optional control icons
/// zoom in, zoom out and reset.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePanZoom;

pub struct NativeHandle {
    style: CssStyleDeclaration,
    controls: Option<Element>,
    listeners: Vec<EventListener>,
}

impl PanZoom for NativePanZoom {
    type Handle = NativeHandle;

    fn attach(
        &self,
        element: &Element,
        options: &PanZoomOptions,
    ) -> Result<NativeHandle, EmbedError> {
        let style = inline_style(element)?;
        let _ = style.set_property("transform-origin", "0 0");

        let view = Rc::new(RefCell::new(ViewTransform::new(options)));
        apply(&style, &view.borrow());

        let mut listeners = Vec::new();
        let mut controls = None;

        if options.zoom_enabled {
            let view = view.clone();
            let style = style.clone();
            let target = element.clone();
            listeners.push(EventListener::new_with_options(
                element,
                "wheel",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                        return;
                    };
                    wheel.prevent_default();
                    let (x, y) = local_point(&target, wheel.client_x(), wheel.client_y());
                    view.borrow_mut().wheel(wheel.delta_y(), x, y);
                    apply(&style, &view.borrow());
                },
            ));
        }

        // ------ DRAG ------
        let last_mouse: Rc<Cell<Option<(f64, f64)>>> = Rc::new(Cell::new(None));
        {
            let last_mouse = last_mouse.clone();
            listeners.push(EventListener::new(element, "mousedown", move |event| {
                if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                    last_mouse.set(Some((mouse.client_x() as f64, mouse.client_y() as f64)));
                }
            }));
        }
        {
            let last_mouse = last_mouse.clone();
            let view = view.clone();
            let style = style.clone();
            listeners.push(EventListener::new(&document(), "mousemove", move |event| {
                let (Some((lx, ly)), Some(mouse)) =
                    (last_mouse.get(), event.dyn_ref::<MouseEvent>())
                else {
                    return;
                };
                let (cx, cy) = (mouse.client_x() as f64, mouse.client_y() as f64);
                view.borrow_mut().pan_by(cx - lx, cy - ly);
                last_mouse.set(Some((cx, cy)));
                apply(&style, &view.borrow());
            }));
        }
        listeners.push(EventListener::new(&document(), "mouseup", move |_| {
            last_mouse.set(None);
        }));

        if options.zoom_enabled && options.control_icons_enabled {
            if let Some(parent) = element.parent_element() {
                let bar = document()
                    .create_element("div")
                    .map_err(|e| EmbedError::dom("creating pan/zoom controls", e))?;
                bar.set_class_name(CONTROLS_CLASS);

                let buttons: [(&str, &str, fn(&mut ViewTransform)); 3] = [
                    ("+", "Zoom in", ViewTransform::zoom_in),
                    ("\u{2212}", "Zoom out", ViewTransform::zoom_out),
                    ("\u{27f2}", "Reset", ViewTransform::reset),
                ];
                for (label, title, action) in buttons {
                    let button = document()
                        .create_element("button")
                        .map_err(|e| EmbedError::dom("creating pan/zoom controls", e))?;
                    button.set_text_content(Some(label));
                    let _ = button.set_attribute("type", "button");
                    let _ = button.set_attribute("title", title);

                    let view = view.clone();
                    let style = style.clone();
                    listeners.push(EventListener::new(&button, "click", move |_| {
                        action(&mut view.borrow_mut());
                        apply(&style, &view.borrow());
                    }));
                    bar.append_child(&button)
                        .map_err(|e| EmbedError::dom("creating pan/zoom controls", e))?;
                }

                parent
                    .append_child(&bar)
                    .map_err(|e| EmbedError::dom("inserting pan/zoom controls", e))?;
                controls = Some(bar);
            }
        }

        Ok(NativeHandle {
            style,
            controls,
            listeners,
        })
    }
}

impl PanZoomHandle for NativeHandle {
    fn destroy(self) {
        drop(self.listeners);
        if let Some(controls) = self.controls {
            controls.remove();
        }
        let _ = self.style.remove_property("transform");
        let _ = self.style.remove_property("transform-origin");
    }
}

fn inline_style(element: &Element) -> Result<CssStyleDeclaration, EmbedError> {
    if let Some(svg) = element.dyn_ref::<SvgElement>() {
        Ok(svg.style())
    } else if let Some(html) = element.dyn_ref::<HtmlElement>() {
        Ok(html.style())
    } else {
        Err(EmbedError::PanZoom(format!(
            "<{}> has no inline style",
            element.tag_name().to_lowercase()
        )))
    }
}

fn apply(style: &CssStyleDeclaration, view: &ViewTransform) {
    let _ = style.set_property("transform", &view.css());
}

/// Cursor position relative to the untransformed element, approximated by
/// its parent's box.
fn local_point(element: &Element, client_x: i32, client_y: i32) -> (f64, f64) {
    let origin = element
        .parent_element()
        .map(|p| p.get_bounding_client_rect())
        .map(|r| (r.left(), r.top()))
        .unwrap_or((0.0, 0.0));
    (client_x as f64 - origin.0, client_y as f64 - origin.1)
}
