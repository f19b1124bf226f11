// src/main.rs
use gloo_net::http::Request;
use std::rc::Rc;
use svg_embed::components::{EmbedStage, Gallery};
use svg_embed::utils::resource_url;
use svg_embed::{AnyPanZoom, EmbedState, GalleryManifest, HttpSource, PageEmbedManager};
use yew::prelude::*;

const MANIFEST_PATH: &str = "gallery.json";

pub enum AppMsg {
    ManifestLoaded(GalleryManifest),
    ManifestLoadFailed(String),
    EmbedChanged(EmbedState),
    ManagerFailed(String),
}

pub struct App {
    manifest: GalleryManifest,
    embed_state: EmbedState,
    manager: Option<Rc<PageEmbedManager>>,
    loading: bool,
    error: Option<String>,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_future(async {
            match load_manifest().await {
                Ok(manifest) => AppMsg::ManifestLoaded(manifest),
                Err(e) => AppMsg::ManifestLoadFailed(e),
            }
        });

        Self {
            manifest: GalleryManifest::default(),
            embed_state: EmbedState::Absent,
            manager: None,
            loading: true,
            error: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::ManifestLoaded(manifest) => {
                log::info!(
                    "Loaded gallery '{}' with {} item(s)",
                    manifest.title,
                    manifest.item_count()
                );
                self.manifest = manifest;
                self.loading = false;
                true
            }
            AppMsg::ManifestLoadFailed(error) => {
                log::warn!("Failed to load gallery manifest, using defaults: {}", error);
                self.error = Some(error);
                self.loading = false;
                true
            }
            AppMsg::EmbedChanged(state) => {
                self.embed_state = state;
                true
            }
            AppMsg::ManagerFailed(error) => {
                log::error!("Embed manager could not start: {}", error);
                self.error = Some(error);
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        // the manager needs the container (and dialog) in the DOM
        if self.loading || self.manager.is_some() {
            return;
        }

        let config = self.manifest.config.clone();
        let backend = AnyPanZoom::new(config.backend);
        let manager = Rc::new(
            PageEmbedManager::new(config, HttpSource, backend)
                .with_observer(ctx.link().callback(AppMsg::EmbedChanged)),
        );
        if let Err(e) = manager.initialize() {
            ctx.link().send_message(AppMsg::ManagerFailed(e.to_string()));
        }
        self.manager = Some(manager);
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! {
                <div class="app-container">
                    <main class="app-main">
                        <div class="loading">{"Loading gallery..."}</div>
                    </main>
                </div>
            };
        }

        let config = self.manifest.config.clone();
        let status_class = match &self.embed_state {
            EmbedState::Failed { .. } => "status error",
            EmbedState::Loading { .. } => "status loading",
            _ => "status",
        };

        html! {
            <div class="app-container">
                <header class="app-header">
                    <h1>{self.manifest.title.clone()}</h1>
                </header>

                <main class="app-main">
                    if let Some(error) = &self.error {
                        <div class="error">{error.clone()}</div>
                    }

                    <Gallery
                        items={self.manifest.items.clone()}
                        trigger_class={config.trigger_class.clone()}
                        active_url={self.embed_state.url().map(str::to_string)}
                    />

                    <p class={status_class}>{self.embed_state.describe()}</p>

                    <EmbedStage config={config} />
                </main>
            </div>
        }
    }
}

async fn load_manifest() -> Result<GalleryManifest, String> {
    let url = resource_url(MANIFEST_PATH);
    let resp = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch {}: {:?}", url, e))?;
    if !resp.ok() {
        return Err(format!("Manifest not found at {} (HTTP {})", url, resp.status()));
    }
    let text = resp
        .text()
        .await
        .map_err(|e| format!("Failed to read {}: {:?}", url, e))?;
    GalleryManifest::from_json(&text)
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
