//! Leptos wrapper for pages assembled client-side.
//!
//! Static pages get the switcher from the crate's start function; pages
//! rendered with Leptos wrap their tab markup in [`LangTabs`] instead.

use leptos::prelude::*;

use crate::config::TabSet;
use crate::switcher::init_lang_tabs;

/// Attaches language-tab switching to the wrapped markup once the
/// component mounts.
///
/// The children are rendered as-is; the effect runs after they are in
/// the DOM and binds the click handlers. Initialization is guarded so
/// reactive re-runs do not double-register handlers.
#[component]
pub fn LangTabs(tab_set: TabSet, children: Children) -> impl IntoView {
    let is_initialized = StoredValue::new(false);

    Effect::new(move |_| {
        if !is_initialized.get_value() {
            is_initialized.set_value(true);
            let bound = init_lang_tabs(&tab_set);
            log::debug!(
                "LangTabs mounted: bound {bound} selectors for {:?}",
                tab_set.languages()
            );
        }
    });

    children()
}
