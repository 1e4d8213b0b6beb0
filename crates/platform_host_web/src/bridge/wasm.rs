use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::*;

fn js_error_message(context: &str, err: JsValue) -> String {
    match err.dyn_ref::<js_sys::Error>() {
        Some(js_err) => format!("{context}: {}", String::from(js_err.message())),
        None => format!("{context}: {err:?}"),
    }
}

pub async fn fetch_text(url: &str) -> Result<HttpResponse, String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| js_error_message("fetch failed", e))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|e| js_error_message("fetch resolved to a non-Response value", e))?;

    let status = response.status();
    let text_promise = response
        .text()
        .map_err(|e| js_error_message("reading response body failed", e))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|e| js_error_message("reading response body failed", e))?
        .as_string()
        .unwrap_or_default();

    Ok(HttpResponse::new(status, body))
}
