//! CSV Download
//!
//! Builds a CSV report in memory and hands it to the browser as a file
//! download through a Blob object URL and a synthetic anchor click.

use smartlease_core::csv::{self, CsvRecord, ExportError};
use wasm_bindgen::{JsCast, JsValue};

/// Serialize records and trigger a client-side download.
///
/// An empty dataset returns `ExportError::EmptyDataset` before any file is
/// produced; browser-side failures are logged and otherwise swallowed,
/// since there is nothing actionable to show the user.
pub fn download_csv<T: CsvRecord>(records: &[T], filename: &str) -> Result<(), ExportError> {
    let content = csv::to_csv(records)?;
    if let Err(err) = trigger_download(&content, filename) {
        web_sys::console::error_2(&"CSV download failed:".into(), &err);
    }
    Ok(())
}

fn trigger_download(content: &str, filename: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(content));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8;");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}
