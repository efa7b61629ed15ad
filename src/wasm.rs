//! JavaScript bindings: JSON in, JSON out.

use wasm_bindgen::prelude::*;

use crate::converters::{deck::convert_presentation, markdown::presentation_outline};
use crate::models::slide::Presentation;

/// Routes `log` output to the browser console and panics to `console.error`.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("[wasm] console logger already installed");
    }
}

/// Lays out a presentation given as JSON and returns the document as JSON.
#[wasm_bindgen(js_name = renderPresentation)]
pub fn render_presentation_json(json: &str) -> Result<String, JsValue> {
    let presentation = Presentation::from_json(json).map_err(to_js)?;
    let document = convert_presentation(&presentation).map_err(to_js)?;
    document.to_json().map_err(to_js)
}

/// Markdown outline of a presentation given as JSON.
#[wasm_bindgen(js_name = outlinePresentation)]
pub fn outline_presentation_json(json: &str) -> Result<String, JsValue> {
    let presentation = Presentation::from_json(json).map_err(to_js)?;
    presentation_outline(&presentation).map_err(to_js)
}

fn to_js(error: crate::errors::DeckError) -> JsValue {
    JsValue::from_str(&error.to_string())
}
