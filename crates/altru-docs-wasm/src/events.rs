//! Event wiring for toggle controls, navigation links, search input and
//! in-page anchors.

use std::rc::Rc;

use altru_docs_client::fragment_target;
use altru_docs_core::Lang;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{
    Document, Element, Event, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions,
};

use crate::{
    dom::{LANG_TOGGLE_ID, SEARCH_INPUT_ID, THEME_TOGGLE_ID, query_all},
    page::Page,
};

/// Attach all page handlers. Listeners live as long as the page.
pub fn attach(document: &Document, page: &Rc<Page>) {
    if let Some(toggle) = document.get_element_by_id(LANG_TOGGLE_ID) {
        let page = Rc::clone(page);
        listen(&toggle, "click", move |event| {
            event.prevent_default();
            let lang = page.toggle_language();
            tracing::debug!(%lang, "language toggled");
        });
    }

    for link in query_all(document, ".nav-link[data-lang]") {
        let Some(lang) = link
            .get_attribute("data-lang")
            .and_then(|value| value.parse::<Lang>().ok())
        else {
            continue;
        };
        let page = Rc::clone(page);
        listen(&link, "click", move |_| page.set_language(lang));
    }

    if let Some(toggle) = document.get_element_by_id(THEME_TOGGLE_ID) {
        let page = Rc::clone(page);
        listen(&toggle, "click", move |event| {
            event.prevent_default();
            let theme = page.toggle_theme();
            tracing::debug!(%theme, "theme toggled");
        });
    }

    if let Some(input) = document.get_element_by_id(SEARCH_INPUT_ID) {
        let page = Rc::clone(page);
        listen(&input, "input", move |event| {
            let Some(input) = event
                .current_target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            page.search(&input.value());
        });
    }

    for anchor in query_all(document, "a[href^=\"#\"]") {
        let document = document.clone();
        listen(&anchor, "click", move |event| {
            smooth_scroll(&document, &event);
        });
    }
}

/// Scroll to the anchor's target, leaving the default jump in place when
/// there is no target.
fn smooth_scroll(document: &Document, event: &Event) {
    let Some(anchor) = event
        .current_target()
        .and_then(|target| target.dyn_into::<Element>().ok())
    else {
        return;
    };
    let Some(href) = anchor.get_attribute("href") else {
        return;
    };
    let Some(target) = fragment_target(&href).and_then(|id| document.get_element_by_id(id))
    else {
        return;
    };

    event.prevent_default();
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

fn listen(element: &Element, event_type: &str, handler: impl FnMut(Event) + 'static) {
    let listener = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(e) =
        element.add_event_listener_with_callback(event_type, listener.as_ref().unchecked_ref())
    {
        tracing::warn!(?e, event_type, "failed to attach listener");
        return;
    }
    listener.forget();
}
