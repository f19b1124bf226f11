// src/components/gallery.rs
use crate::config::GalleryItem;
use crate::utils::resource_url;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub items: Vec<GalleryItem>,
    pub trigger_class: String,
    /// URL of the embed being shown or loaded, to highlight its trigger.
    #[prop_or_default]
    pub active_url: Option<String>,
}

/// One trigger link per gallery item. Clicks are handled by the embed
/// manager, not by yew.
#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    if props.items.is_empty() {
        return html! {
            <p class="gallery-empty">{"No drawings available."}</p>
        };
    }

    html! {
        <nav class="gallery">
            <ul>
                {for props.items.iter().map(|item| {
                    let href = resource_url(&item.url);
                    let active = props.active_url.as_deref() == Some(href.as_str());
                    html! {
                        <li>
                            <a
                                class={classes!(props.trigger_class.clone(), active.then_some("active"))}
                                href={href}
                            >
                                {item.label.clone()}
                            </a>
                        </li>
                    }
                })}
            </ul>
        </nav>
    }
}
