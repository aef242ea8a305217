//! Click-driven switching of language documentation tabs.
//!
//! Attaches to server-rendered markup. Clicking a selector activates
//! the matching pane and selector group, and the page scroll is
//! adjusted so the clicked element stays where it was in the viewport
//! even when the pane swap changes the layout above it.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent, Window};

use crate::config::TabSet;

/// Registers a click handler on every selector element of `tab_set`.
///
/// Returns the number of selectors bound; 0 when the current document
/// carries no markup for this set. Missing panes or selectors for an
/// individual language are tolerated. Calling this twice for the same
/// set double-registers the handlers, so callers bind once per page
/// load.
pub fn init_lang_tabs(tab_set: &TabSet) -> usize {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return 0;
    };

    // A page carries at most one of the deployed sets; skip quietly
    // when none of this set's selectors exist.
    if !set_present(&document, tab_set) {
        return 0;
    }

    let mut bound = 0;
    for lang in tab_set.languages() {
        let selectors = elements_by_class(&document, &tab_set.selector_class_for(lang));
        if selectors.is_empty() {
            log::warn!("tab set is present but has no selector for language '{lang}'");
            continue;
        }
        for el in selectors {
            // One closure per selector; the language is moved in by
            // value, so handlers built in this loop stay independent.
            let handler = change_language(tab_set.clone(), lang.clone());
            let _ =
                el.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
            // Listeners live for the page lifetime.
            handler.forget();
            bound += 1;
        }
    }
    bound
}

/// Handler factory: builds the click closure for one language.
fn change_language(tab_set: TabSet, lang: String) -> Closure<dyn FnMut(MouseEvent)> {
    Closure::wrap(Box::new(move |e: MouseEvent| {
        // The selectors are anchors; switching tabs must not navigate.
        e.prevent_default();

        let Some(window) = web_sys::window() else { return };
        let Some(document) = window.document() else { return };

        // Viewport offset of the clicked selector, captured before the
        // class toggles shift the layout.
        let clicked = e.current_target().and_then(|t| t.dyn_into::<Element>().ok());
        let viewport_offset = clicked
            .as_ref()
            .map(|el| el.get_bounding_client_rect().top());

        swap_active(
            &document,
            tab_set.pane_class(),
            &tab_set.pane_class_for(&lang),
            tab_set.active_class(),
        );
        swap_active(
            &document,
            tab_set.selector_class(),
            &tab_set.selector_class_for(&lang),
            tab_set.active_class(),
        );

        if let (Some(el), Some(offset)) = (clicked, viewport_offset) {
            restore_viewport_offset(&window, &el, offset);
        }
    }) as Box<dyn FnMut(MouseEvent)>)
}

/// Moves the active marking: strips `active` from every element of the
/// group, then marks the target elements. Both scans are no-ops on
/// missing markup.
fn swap_active(document: &Document, group_class: &str, target_class: &str, active: &str) {
    for el in elements_by_class(document, group_class) {
        let _ = el.class_list().remove_1(active);
    }
    for el in elements_by_class(document, target_class) {
        let _ = el.class_list().add_1(active);
    }
}

/// Scrolls the window so `el` sits `viewport_offset` pixels from the
/// viewport top again.
fn restore_viewport_offset(window: &Window, el: &Element, viewport_offset: f64) {
    let scroll_x = window.scroll_x().unwrap_or(0.0);
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let element_top = el.get_bounding_client_rect().top() + scroll_y;
    window.scroll_to_with_x_and_y(scroll_x, compensated_scroll_top(element_top, viewport_offset));
}

/// Scroll position that puts an element whose document-relative top is
/// `element_top` at `viewport_offset` pixels from the viewport top.
fn compensated_scroll_top(element_top: f64, viewport_offset: f64) -> f64 {
    element_top - viewport_offset
}

fn set_present(document: &Document, tab_set: &TabSet) -> bool {
    tab_set.languages().iter().any(|lang| {
        document
            .query_selector(&class_query(&tab_set.selector_class_for(lang)))
            .ok()
            .flatten()
            .is_some()
    })
}

fn elements_by_class(document: &Document, class: &str) -> Vec<Element> {
    let mut out = Vec::new();
    let Ok(nodes) = document.query_selector_all(&class_query(class)) else {
        return out;
    };
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else { continue };
        if let Ok(el) = node.dyn_into::<Element>() {
            out.push(el);
        }
    }
    out
}

fn class_query(class: &str) -> String {
    format!(".{class}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_query() {
        assert_eq!(class_query("lang-tab-julia"), ".lang-tab-julia");
        assert_eq!(class_query("tab-pane"), ".tab-pane");
    }

    #[test]
    fn test_compensated_scroll_keeps_viewport_offset() {
        // Selector sits 120px below the viewport top, element top at
        // 500px in the document.
        let offset_before = 120.0;
        let element_top_before = 500.0;
        let scroll_before = element_top_before - offset_before;
        assert_eq!(compensated_scroll_top(element_top_before, offset_before), scroll_before);

        // Pane swap grows the content above: element top moves to 730px.
        // The compensated scroll leaves the element at the same 120px.
        let element_top_after = 730.0;
        let scroll_after = compensated_scroll_top(element_top_after, offset_before);
        assert_eq!(element_top_after - scroll_after, offset_before);
    }

    #[test]
    fn test_compensated_scroll_no_layout_shift() {
        // Clicking the already-active tab changes nothing above the
        // selector; the compensated position equals the current one.
        let element_top = 420.0;
        let offset = 64.0;
        let current_scroll = element_top - offset;
        assert_eq!(compensated_scroll_top(element_top, offset), current_scroll);
    }
}
