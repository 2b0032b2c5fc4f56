//! Hook for listening to document-level events while a widget is active.

use gloo::events::EventListener;
use web_sys::Event;
use yew::prelude::*;

/// Attach `handler` to `event` on the document while `enabled` is true.
///
/// The listener is detached when `enabled` turns false, when the handler
/// changes, or on unmount.
#[hook]
pub fn use_document_listener(event: &'static str, enabled: bool, handler: Callback<Event>) {
    use_effect_with((enabled, handler), move |(enabled, handler)| {
        let listener = if *enabled {
            let handler = handler.clone();
            web_sys::window()
                .and_then(|w| w.document())
                .map(|document| {
                    EventListener::new(&document, event, move |e| handler.emit(e.clone()))
                })
        } else {
            None
        };
        move || drop(listener)
    });
}
