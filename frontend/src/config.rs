use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Shape of the optional `./config.json` served next to the bundle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// Reads `window.<global>.<key>` (falling back to the alternate key casing),
/// returning it only when it is a non-null string.
fn read_window_global(global: &str, keys: [&str; 2]) -> Option<String> {
    let window = web_sys::window()?;
    let holder = js_sys::Reflect::get(&window, &global.into()).ok()?;
    if holder.is_undefined() || holder.is_null() {
        return None;
    }
    let holder = js_sys::Object::from(holder);
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&holder, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

/// Deploy-time overrides that are already present before any fetch:
/// `window.__HRMS_ENV` (injected env.js) wins over `window.__HRMS_CONFIG`
/// (a previously cached config fetch).
fn override_from_globals() -> Option<String> {
    read_window_global("__HRMS_ENV", ["API_BASE_URL", "api_base_url"])
        .or_else(|| read_window_global("__HRMS_CONFIG", ["api_base_url", "API_BASE_URL"]))
}

fn cache_base_url(value: &str) -> String {
    let value = value.trim_end_matches('/').to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

/// Persists a fetched config under `window.__HRMS_CONFIG` so later page loads
/// skip the fetch.
fn remember_in_window(cfg: &RuntimeConfig) {
    let (Some(window), Some(url)) = (web_sys::window(), cfg.api_base_url.as_deref()) else {
        return;
    };
    let holder = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &holder,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&window, &"__HRMS_CONFIG".into(), &holder);
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let response = reqwest::get("./config.json").await.ok()?;
    if !response.status().is_success() {
        return None;
    }
    response.json::<RuntimeConfig>().await.ok()
}

/// Resolves the API base URL, fetching `./config.json` at most once per page
/// load. Resolution order: cached value, window globals, fetched config,
/// built-in default.
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(url) = override_from_globals() {
        return cache_base_url(&url);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        remember_in_window(&cfg);
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("API base URL resolved to {}", base);
}
