//! Browser DOM output for the colour list (WASM only).

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::app::SwatchSink;
use crate::config::AppConfig;
use crate::constants::{APP_CLASS, SWATCH_CLASS};
use crate::render::Swatch;

/// Find the colour list container, building the view shell if the page does
/// not provide one.
///
/// The shell is `<div class="app"><h1>title</h1><div id="colours-list"></div></div>`.
pub fn mount_shell(document: &Document, config: &AppConfig) -> Result<Element, JsValue> {
    if let Some(container) = document.get_element_by_id(&config.container_id) {
        log::debug!("Using existing #{} container", config.container_id);
        return Ok(container);
    }

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("No body in document"))?;

    let app = document.create_element("div")?;
    app.set_class_name(APP_CLASS);

    let heading = document.create_element("h1")?;
    heading.set_text_content(Some(&config.title));
    app.append_child(&heading)?;

    let container = document.create_element("div")?;
    container.set_id(&config.container_id);
    app.append_child(&container)?;

    body.append_child(&app)?;
    log::debug!("Mounted view shell with #{} container", config.container_id);
    Ok(container)
}

/// Renders swatches as `div.colour-box` children of the container.
pub struct DomSink {
    document: Document,
    container: Element,
}

impl DomSink {
    pub fn new(document: Document, container: Element) -> Self {
        Self {
            document,
            container,
        }
    }

    fn build_swatch(&self, swatch: &Swatch) -> Result<Element, JsValue> {
        let element = self.document.create_element("div")?;
        element.set_class_name(SWATCH_CLASS);
        element.set_attribute("data-key", &swatch.key.to_string())?;
        element.set_attribute("style", &format!("background: {}", swatch.fill))?;
        element.set_text_content(Some(&swatch.label));
        Ok(element)
    }
}

impl SwatchSink for DomSink {
    fn show(&self, swatches: &[Swatch]) {
        // The list is always replaced wholesale, so rebuild it from scratch
        self.container.set_text_content(None);

        for swatch in swatches {
            let result = self
                .build_swatch(swatch)
                .and_then(|element| self.container.append_child(&element));
            if let Err(e) = result {
                log::error!("Failed to add swatch {}: {:?}", swatch.key, e);
            }
        }
    }
}
