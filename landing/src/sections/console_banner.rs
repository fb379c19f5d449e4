//! Greeting for whoever opens the devtools console.

use leptos::prelude::*;
use studio_core::SiteConfig;
use studio_core::content::STUDIO_NAME;
use wasm_bindgen::JsValue;

fn banner() -> String {
    format!(
        r#"
    ___  ______ __ __
   /   |/_  __// // /
  / /| | / /  / // /_
 / ___ |/ /  / __  /
/_/  |_/_/  /_/ /_/

  {STUDIO_NAME}
"#
    )
}

#[component]
#[allow(clippy::unused_unit)]
pub fn ConsoleBanner() -> impl IntoView {
    let site_url = use_context::<SiteConfig>().unwrap_or_default().site_url;

    Effect::new(move || print_banner(&site_url));

    view! {}
}

fn print_banner(site_url: &str) {
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{}", banner())),
        &JsValue::from_str("color: #10b981; font-family: monospace; font-size: 11px;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%cWe help Web3 projects convert attention into revenue."),
        &JsValue::from_str("color: #a1a1aa;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%cBuilt with Rust + Leptos | {site_url}")),
        &JsValue::from_str("color: #52525b; font-size: 10px;"),
    );
}
