use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::ColoursView;
use crate::config::AppConfig;
use crate::dom::{DomSink, mount_shell};
use crate::source::HttpSource;

thread_local! {
    /// The live view. Holding it here keeps the page's state alive; replacing
    /// it tears the previous activation down.
    static VIEW: RefCell<Option<ColoursView<HttpSource>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = AppConfig::load_from_local_storage();
    if let Err(e) = console_log::init_with_level(config.log_level.to_level()) {
        web_sys::console::log_1(&format!("Logger already initialized: {}", e).into());
    }

    log::info!("Colours WASM starting, endpoint {}", config.endpoint);
    mount(&config)
}

/// Build and activate a fresh view, discarding any previous one.
fn mount(config: &AppConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No global window exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document in window"))?;

    let container = mount_shell(&document, config)?;
    let sink = DomSink::new(document, container);

    let mut view = ColoursView::new(HttpSource::new(config.endpoint.clone()), sink);
    if let Some(task) = view.activate() {
        wasm_bindgen_futures::spawn_local(task);
    }

    VIEW.with(|slot| *slot.borrow_mut() = Some(view));
    Ok(())
}

/// Tear the view down. A load still in flight is discarded when it lands.
#[wasm_bindgen]
pub fn unmount() {
    let view = VIEW.with(|slot| slot.borrow_mut().take());
    if view.is_some() {
        log::info!("Colour view unmounted");
    }
}

/// Tear down and activate again, which issues one new retrieval.
#[wasm_bindgen]
pub fn remount() -> Result<(), JsValue> {
    unmount();
    mount(&AppConfig::load_from_local_storage())
}
