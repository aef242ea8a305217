pub mod component;
pub mod config;
pub mod switcher;

use wasm_bindgen::prelude::wasm_bindgen;

use config::TabSet;

/// Binds the switcher to every deployed tab set present on the page.
/// Exported for pages that load the module manually instead of relying
/// on the start function.
#[wasm_bindgen]
pub fn attach() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    for tab_set in TabSet::deployed() {
        let bound = switcher::init_lang_tabs(&tab_set);
        if bound > 0 {
            log::debug!(
                "bound {bound} language tab selectors for {:?}",
                tab_set.languages()
            );
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    attach();
}
