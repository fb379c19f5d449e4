//! Browser side of the lead submission: one `fetch` POST to the form relay.

use studio_core::{LeadPayload, TransmissionError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// POST the lead as JSON. Any 2xx counts as delivered; the body is ignored.
pub async fn post_lead(endpoint: &str, payload: &LeadPayload) -> Result<(), TransmissionError> {
    let window = web_sys::window().ok_or(TransmissionError::NoWindow)?;
    let body = payload
        .to_json()
        .map_err(|e| TransmissionError::Encode(e.to_string()))?;

    let opts = web_sys::RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));

    let headers = web_sys::Headers::new().map_err(|e| TransmissionError::Encode(js_message(&e)))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| TransmissionError::Encode(js_message(&e)))?;
    headers
        .set("Accept", "application/json")
        .map_err(|e| TransmissionError::Encode(js_message(&e)))?;
    opts.set_headers(headers.as_ref());

    let resp = JsFuture::from(window.fetch_with_str_and_init(endpoint, &opts))
        .await
        .map_err(|e| TransmissionError::Network(js_message(&e)))?;
    let resp: web_sys::Response = resp
        .dyn_into()
        .map_err(|e| TransmissionError::Network(js_message(&e)))?;

    if !resp.ok() {
        return Err(TransmissionError::Status(resp.status()));
    }
    tracing::info!(status = resp.status(), "lead delivered");
    Ok(())
}

/// Blocking notification for failures the visitor must see.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.alert_with_message(message) {
            tracing::error!(error = %js_message(&err), "alert failed");
        }
    }
}

fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
