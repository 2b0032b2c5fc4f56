mod components;
mod hooks;
mod pages;

use gloo::events::EventListener;
use iqb_shared::config::{CONFIG_ATTRIBUTE, DEFAULT_MOUNT_ID};
use iqb_shared::{mount, DashboardConfig};
use pages::dashboard::{DashboardView, DashboardViewProps};
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Render the dashboard into the element with id `mount_id`.
///
/// A missing element is logged and skipped; nothing is rendered.
fn render_into(document: &Document, mount_id: &str) {
    let root = match mount::resolve(mount_id, |id| document.get_element_by_id(id)) {
        Ok(root) => root,
        Err(e) => {
            log::warn!("{}; dashboard not rendered", e);
            return;
        }
    };

    let config = DashboardConfig::from_attribute(root.get_attribute(CONFIG_ATTRIBUTE).as_deref())
        .unwrap_or_else(|e| {
            log::warn!("{}; using defaults", e);
            DashboardConfig::default()
        });

    log::info!("Mounting dashboard into #{}", mount_id);
    yew::Renderer::<DashboardView>::with_root_and_props(root, DashboardViewProps { config })
        .render();
}

/// Mount once the DOM is parsed, waiting for DOMContentLoaded if needed.
#[wasm_bindgen]
pub fn mount_at(mount_id: &str) {
    let Some(document) = document() else {
        log::warn!("No document available; dashboard not rendered");
        return;
    };

    if document.ready_state() == "loading" {
        let mount_id = mount_id.to_string();
        let target = document.clone();
        EventListener::once(&target, "DOMContentLoaded", move |_| {
            render_into(&document, &mount_id)
        })
        .forget();
    } else {
        render_into(&document, mount_id);
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    mount_at(DEFAULT_MOUNT_ID);
}
