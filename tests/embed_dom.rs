//! Browser tests for the embed manager against a real DOM.
//!
//! Run with `wasm-pack test --headless --firefox` (or `--chrome`).
#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use svg_embed::pan_zoom::NativePanZoom;
use svg_embed::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

// ------ FAKES ------

/// Serves documents from memory, optionally after a delay.
#[derive(Default)]
struct MemorySource {
    docs: HashMap<String, String>,
    delays: HashMap<String, i32>,
}

impl MemorySource {
    fn with(mut self, url: &str, markup: &str) -> Self {
        self.docs.insert(url.to_string(), markup.to_string());
        self
    }

    fn delayed(mut self, url: &str, ms: i32) -> Self {
        self.delays.insert(url.to_string(), ms);
        self
    }
}

impl SvgSource for MemorySource {
    async fn fetch_markup(&self, url: &str) -> Result<String, EmbedError> {
        if let Some(ms) = self.delays.get(url) {
            sleep(*ms).await;
        }
        self.docs.get(url).cloned().ok_or(EmbedError::Status {
            url: url.to_string(),
            status: 404,
        })
    }
}

/// Records attach/destroy calls instead of wiring real behavior.
#[derive(Clone, Default)]
struct RecordingPanZoom {
    calls: Rc<RefCell<Vec<String>>>,
}

struct RecordingHandle {
    id: String,
    calls: Rc<RefCell<Vec<String>>>,
}

impl PanZoom for RecordingPanZoom {
    type Handle = RecordingHandle;

    fn attach(&self, element: &Element, options: &PanZoomOptions) -> Result<RecordingHandle, EmbedError> {
        self.calls.borrow_mut().push(format!(
            "attach:{}:{}:{}",
            element.id(),
            options.zoom_enabled,
            options.control_icons_enabled
        ));
        Ok(RecordingHandle {
            id: element.id(),
            calls: self.calls.clone(),
        })
    }
}

impl PanZoomHandle for RecordingHandle {
    fn destroy(self) {
        self.calls.borrow_mut().push(format!("destroy:{}", self.id));
    }
}

impl RecordingPanZoom {
    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

// ------ FIXTURE ------

/// Page markup for one test; removed again on drop.
struct Page {
    root: Element,
}

impl Page {
    fn new() -> Self {
        let document = gloo_utils::document();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(
            r#"<a class="svg-view" id="trigger-a" href="a.svg">A</a>
               <a class="svg-view" id="trigger-b" href="b.svg"><span id="label-b">B</span></a>
               <a class="svg-view" id="trigger-bare">Bare</a>
               <span id="svg-url" hidden></span>
               <dialog id="svg-modal"><div id="svg-container"></div></dialog>"#,
        );
        document.body().unwrap().append_child(&root).unwrap();
        Page { root }
    }

    fn inline() -> Self {
        let page = Self::new();
        // inline mode keeps the container outside the dialog
        let container = page.container();
        page.root.append_child(&container).unwrap();
        page
    }

    fn container(&self) -> Element {
        gloo_utils::document().get_element_by_id("svg-container").unwrap()
    }

    fn svgs(&self) -> u32 {
        self.container().query_selector_all("svg").unwrap().length()
    }

    fn embed(&self) -> Element {
        self.container().query_selector("svg").unwrap().unwrap()
    }

    fn remove(&self, id: &str) {
        gloo_utils::document().get_element_by_id(id).unwrap().remove();
    }

    fn click(&self, id: &str) {
        gloo_utils::document()
            .get_element_by_id(id)
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.root.remove();
    }
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn source() -> MemorySource {
    MemorySource::default()
        .with("a.svg", r#"<svg data-doc="a" viewBox="0 0 10 10"><rect width="10" height="10"/></svg>"#)
        .with(
            "b.svg",
            "<?xml version=\"1.0\"?>\n<svg data-doc=\"b\"><circle r=\"4\"/></svg>\n",
        )
        .with("empty.svg", "<html><body><p>moved</p></body></html>")
}

fn manager(
    config: EmbedConfig,
    source: MemorySource,
    pan_zoom: &RecordingPanZoom,
) -> Rc<EmbedManager<MemorySource, RecordingPanZoom>> {
    Rc::new(EmbedManager::new(config, source, pan_zoom.clone()))
}

// ------ TESTS ------

#[wasm_bindgen_test]
async fn test_click_installs_embed() {
    let page = Page::inline();
    let pan_zoom = RecordingPanZoom::default();
    let manager = manager(EmbedConfig::default(), source(), &pan_zoom);
    manager.initialize().unwrap();

    page.click("trigger-a");
    sleep(10).await;

    assert_eq!(page.svgs(), 1);
    let svg = page.embed();
    assert_eq!(svg.id(), "svg-doc");
    assert_eq!(svg.get_attribute("width").as_deref(), Some("100%"));
    assert_eq!(svg.get_attribute("data-doc").as_deref(), Some("a"));
    assert_eq!(pan_zoom.calls(), vec!["attach:svg-doc:true:true"]);
    assert_eq!(
        manager.state(),
        EmbedState::Present {
            url: "a.svg".to_string()
        }
    );
    assert_eq!(manager.current_url().as_deref(), Some("a.svg"));
}

#[wasm_bindgen_test]
async fn test_next_click_replaces_embed() {
    let page = Page::inline();
    let pan_zoom = RecordingPanZoom::default();
    let manager = manager(EmbedConfig::default(), source(), &pan_zoom);
    manager.initialize().unwrap();

    page.click("trigger-a");
    sleep(10).await;
    // clicking inside the trigger counts as clicking the trigger
    page.click("label-b");
    sleep(10).await;

    assert_eq!(page.svgs(), 1);
    assert_eq!(page.embed().id(), "svg-doc");
    assert_eq!(page.embed().get_attribute("data-doc").as_deref(), Some("b"));
    assert_eq!(
        pan_zoom.calls(),
        vec![
            "attach:svg-doc:true:true",
            "destroy:svg-doc",
            "attach:svg-doc:true:true"
        ]
    );
}

#[wasm_bindgen_test]
async fn test_repeated_clicks_keep_one_svg() {
    let page = Page::inline();
    let pan_zoom = RecordingPanZoom::default();
    let manager = manager(EmbedConfig::default(), source(), &pan_zoom);
    manager.initialize().unwrap();

    for id in ["trigger-a", "trigger-b", "trigger-a", "trigger-a"] {
        page.click(id);
        sleep(10).await;
        assert_eq!(page.svgs(), 1);
    }
    let attaches = pan_zoom.calls().iter().filter(|c| c.starts_with("attach")).count();
    let destroys = pan_zoom.calls().iter().filter(|c| c.starts_with("destroy")).count();
    assert_eq!(attaches, 4);
    assert_eq!(destroys, 3);
}

#[wasm_bindgen_test]
async fn test_remove_embed() {
    let page = Page::inline();
    let pan_zoom = RecordingPanZoom::default();
    let manager = manager(EmbedConfig::default(), source(), &pan_zoom);

    manager.create_embed("a.svg").await.unwrap();
    assert!(manager.remove_embed());

    assert_eq!(page.svgs(), 0);
    assert!(gloo_utils::document().get_element_by_id("svg-doc").is_none());
    assert_eq!(pan_zoom.calls().last().map(String::as_str), Some("destroy:svg-doc"));
    assert_eq!(manager.state(), EmbedState::Absent);

    // nothing left to remove
    assert!(!manager.remove_embed());
    assert_eq!(pan_zoom.calls().len(), 2);
}

#[wasm_bindgen_test]
async fn test_failed_fetch_is_reported() {
    let page = Page::inline();
    let pan_zoom = RecordingPanZoom::default();
    let manager = manager(EmbedConfig::default(), source(), &pan_zoom);

    manager.create_embed("a.svg").await.unwrap();
    let err = manager.create_embed("missing.svg").await.unwrap_err();

    assert_eq!(
        err,
        EmbedError::Status {
            url: "missing.svg".to_string(),
            status: 404
        }
    );
    assert!(matches!(manager.state(), EmbedState::Failed { .. }));
    // the earlier embed is untouched
    assert_eq!(page.svgs(), 1);
    assert_eq!(page.embed().get_attribute("data-doc").as_deref(), Some("a"));
    assert_eq!(pan_zoom.calls(), vec!["attach:svg-doc:true:true"]);
}

#[wasm_bindgen_test]
async fn test_payload_without_svg() {
    let page = Page::inline();
    let pan_zoom = RecordingPanZoom::default();
    let manager = manager(EmbedConfig::default(), source(), &pan_zoom);

    let err = manager.create_embed("empty.svg").await.unwrap_err();
    assert_eq!(err, EmbedError::NoSvg);
    assert_eq!(page.svgs(), 0);
    assert!(pan_zoom.calls().is_empty());
}

#[wasm_bindgen_test]
async fn test_modal_defers_until_shown() {
    let page = Page::new();
    let pan_zoom = RecordingPanZoom::default();
    let manager = manager(EmbedConfig::default().modal(true), source(), &pan_zoom);
    manager.initialize().unwrap();

    page.click("trigger-b");

    // nothing changes before the dialog reports itself shown
    assert_eq!(page.svgs(), 0);
    let holder = gloo_utils::document().get_element_by_id("svg-url").unwrap();
    assert_eq!(holder.text_content().as_deref(), Some("b.svg"));
    assert!(ModalDialog::find("svg-modal").unwrap().is_open());

    sleep(20).await;

    assert_eq!(page.svgs(), 1);
    assert_eq!(page.embed().id(), "svg-doc");
    assert_eq!(page.embed().get_attribute("data-doc").as_deref(), Some("b"));
    assert_eq!(pan_zoom.calls(), vec!["attach:svg-doc:true:true"]);

    ModalDialog::find("svg-modal").unwrap().hide();
}

#[wasm_bindgen_test]
async fn test_modal_replaces_previous_embed() {
    let page = Page::new();
    let pan_zoom = RecordingPanZoom::default();
    let manager = manager(EmbedConfig::default().modal(true), source(), &pan_zoom);
    manager.initialize().unwrap();

    page.click("trigger-a");
    sleep(20).await;
    ModalDialog::find("svg-modal").unwrap().hide();
    page.click("trigger-b");
    sleep(20).await;

    assert_eq!(page.svgs(), 1);
    assert_eq!(page.embed().get_attribute("data-doc").as_deref(), Some("b"));
    assert_eq!(
        pan_zoom.calls(),
        vec![
            "attach:svg-doc:true:true",
            "destroy:svg-doc",
            "attach:svg-doc:true:true"
        ]
    );

    ModalDialog::find("svg-modal").unwrap().hide();
}

#[wasm_bindgen_test]
async fn test_superseded_load_is_dropped() {
    let page = Page::inline();
    let pan_zoom = RecordingPanZoom::default();
    let manager = manager(
        EmbedConfig::default(),
        source().delayed("a.svg", 40),
        &pan_zoom,
    );

    let slow_result = Rc::new(RefCell::new(None));
    {
        let manager = manager.clone();
        let slow_result = slow_result.clone();
        spawn_local(async move {
            let result = manager.create_embed("a.svg").await;
            *slow_result.borrow_mut() = Some(result);
        });
    }
    // let the slow load take its ticket first
    sleep(5).await;
    manager.create_embed("b.svg").await.unwrap();
    sleep(80).await;

    assert_eq!(*slow_result.borrow(), Some(Ok(())));
    assert_eq!(page.svgs(), 1);
    assert_eq!(page.embed().get_attribute("data-doc").as_deref(), Some("b"));
    assert_eq!(pan_zoom.calls(), vec!["attach:svg-doc:true:true"]);
    assert_eq!(manager.current_url().as_deref(), Some("b.svg"));
}

#[wasm_bindgen_test]
fn test_initialize_requires_container() {
    let pan_zoom = RecordingPanZoom::default();
    let manager = manager(EmbedConfig::default(), source(), &pan_zoom);
    assert_eq!(
        manager.initialize(),
        Err(EmbedError::MissingElement("#svg-container".to_string()))
    );
}

#[wasm_bindgen_test]
fn test_modal_initialize_requires_holder() {
    let page = Page::new();
    page.remove("svg-url");
    let pan_zoom = RecordingPanZoom::default();
    let manager = manager(EmbedConfig::default().modal(true), source(), &pan_zoom);
    assert_eq!(
        manager.initialize(),
        Err(EmbedError::MissingElement("#svg-url".to_string()))
    );
}

#[wasm_bindgen_test]
fn test_modal_initialize_requires_dialog() {
    // the container stays on the page, only the dialog goes
    let page = Page::inline();
    page.remove("svg-modal");
    let pan_zoom = RecordingPanZoom::default();
    let manager = manager(EmbedConfig::default().modal(true), source(), &pan_zoom);
    assert_eq!(
        manager.initialize(),
        Err(EmbedError::MissingElement("#svg-modal".to_string()))
    );
}

#[wasm_bindgen_test]
fn test_dialog_must_be_a_dialog_element() {
    let _page = Page::inline();
    assert_eq!(
        ModalDialog::find("svg-container").unwrap_err(),
        EmbedError::Dom("#svg-container is not a <dialog>".to_string())
    );

    let pan_zoom = RecordingPanZoom::default();
    let config = EmbedConfig {
        dialog_id: "svg-container".to_string(),
        ..EmbedConfig::default().modal(true)
    };
    let manager = manager(config, source(), &pan_zoom);
    assert!(matches!(manager.initialize(), Err(EmbedError::Dom(_))));
}

#[wasm_bindgen_test]
async fn test_initialize_twice_binds_once() {
    let page = Page::inline();
    let pan_zoom = RecordingPanZoom::default();
    let manager = manager(EmbedConfig::default(), source(), &pan_zoom);
    manager.initialize().unwrap();
    manager.initialize().unwrap();

    page.click("trigger-a");
    sleep(10).await;

    assert_eq!(page.svgs(), 1);
    assert_eq!(pan_zoom.calls(), vec!["attach:svg-doc:true:true"]);
}

#[wasm_bindgen_test]
async fn test_trigger_without_href_is_ignored() {
    let page = Page::inline();
    let pan_zoom = RecordingPanZoom::default();
    let manager = manager(EmbedConfig::default(), source(), &pan_zoom);
    manager.initialize().unwrap();

    page.click("trigger-bare");
    sleep(10).await;

    assert_eq!(page.svgs(), 0);
    assert!(pan_zoom.calls().is_empty());
    assert_eq!(manager.state(), EmbedState::Absent);
}

#[wasm_bindgen_test]
async fn test_empty_holder_leaves_embed_alone() {
    let page = Page::new();
    let pan_zoom = RecordingPanZoom::default();
    let manager = manager(EmbedConfig::default().modal(true), source(), &pan_zoom);

    manager.create_embed("a.svg").await.unwrap();
    assert_eq!(manager.replace_svg_in_modal().await, Ok(()));

    assert_eq!(page.svgs(), 1);
    assert_eq!(page.embed().get_attribute("data-doc").as_deref(), Some("a"));
    assert_eq!(pan_zoom.calls(), vec!["attach:svg-doc:true:true"]);
    assert_eq!(manager.current_url().as_deref(), Some("a.svg"));
}

#[wasm_bindgen_test]
async fn test_shown_without_holder_reports_error() {
    let page = Page::new();
    let pan_zoom = RecordingPanZoom::default();
    let manager = manager(EmbedConfig::default().modal(true), source(), &pan_zoom);
    manager.initialize().unwrap();
    page.remove("svg-url");

    assert_eq!(
        manager.replace_svg_in_modal().await,
        Err(EmbedError::MissingElement("#svg-url".to_string()))
    );

    // the same failure reached through the dialog leaves everything in place
    let dialog = ModalDialog::find("svg-modal").unwrap();
    dialog.show().unwrap();
    sleep(20).await;

    assert_eq!(page.svgs(), 0);
    assert!(pan_zoom.calls().is_empty());
    assert_eq!(manager.state(), EmbedState::Absent);

    dialog.hide();
}

#[wasm_bindgen_test]
async fn test_native_backend_controls() {
    let page = Page::inline();
    let manager = EmbedManager::new(EmbedConfig::default(), source(), NativePanZoom);

    manager.create_embed("a.svg").await.unwrap();
    let controls = page
        .container()
        .query_selector(".svg-pan-zoom-controls")
        .unwrap()
        .expect("controls are inserted next to the svg");
    assert_eq!(controls.child_element_count(), 3);

    let transform = page
        .embed()
        .dyn_into::<web_sys::SvgElement>()
        .unwrap()
        .style()
        .get_property_value("transform")
        .unwrap();
    assert!(transform.contains("scale(1)"));

    assert!(manager.remove_embed());
    assert!(page
        .container()
        .query_selector(".svg-pan-zoom-controls")
        .unwrap()
        .is_none());
    assert_eq!(page.svgs(), 0);
}
