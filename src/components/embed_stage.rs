// src/components/embed_stage.rs
use crate::config::EmbedConfig;
use crate::embed::ModalDialog;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EmbedStageProps {
    pub config: EmbedConfig,
}

/// The container, URL holder and (in modal mode) dialog the embed manager
/// works against. Their children are owned by the manager, so nothing here
/// renders inside the container.
#[function_component(EmbedStage)]
pub fn embed_stage(props: &EmbedStageProps) -> Html {
    let config = &props.config;
    let holder = html! {
        <span id={config.holder_id.clone()} class="svg-url" hidden={true}></span>
    };
    let container = html! {
        <div id={config.container_id.clone()} class="svg-container"></div>
    };

    if !config.modal {
        return html! {
            <section class="embed-stage">
                { holder }
                { container }
            </section>
        };
    }

    let on_close = {
        let dialog_id = config.dialog_id.clone();
        Callback::from(move |_: MouseEvent| match ModalDialog::find(&dialog_id) {
            Ok(dialog) => dialog.hide(),
            Err(e) => log::warn!("{}", e),
        })
    };

    html! {
        <section class="embed-stage">
            { holder }
            <dialog id={config.dialog_id.clone()} class="svg-modal">
                <button class="modal-close" type="button" title="Close" onclick={on_close}>{"\u{00d7}"}</button>
                { container }
            </dialog>
        </section>
    }
}
