use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "https://reactvolt.onrender.com";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn read_global_key(global: &str, keys: [&str; 2]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
        .filter(|v| !v.trim().is_empty())
}

fn snapshot_from_globals() -> Option<String> {
    // window.__REACTVOLT_ENV = { API_BASE_URL: "..." } (env.js) wins over
    // window.__REACTVOLT_CONFIG = { api_base_url: "..." }.
    read_global_key("__REACTVOLT_ENV", ["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global_key("__REACTVOLT_CONFIG", ["api_base_url", "API_BASE_URL"]))
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

fn write_window_config(url: &str) {
    let Some(w) = web_sys::window() else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&w, &"__REACTVOLT_CONFIG".into(), &obj);
}

async fn fetch_runtime_config() -> anyhow::Result<String> {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .context("no window origin")?;
    let resp = reqwest::get(format!("{}/config.json", origin))
        .await
        .context("config.json request failed")?;
    if !resp.status().is_success() {
        bail!("config.json answered {}", resp.status());
    }
    let cfg: RuntimeConfig = resp.json().await.context("config.json is not valid")?;
    cfg.api_base_url
        .filter(|url| !url.trim().is_empty())
        .context("config.json has no api_base_url")
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    match fetch_runtime_config().await {
        Ok(url) => {
            write_window_config(&url);
            return cache_base_url(&url);
        }
        Err(err) => log::debug!("Runtime config unavailable: {:#}", err),
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("API base URL: {}", url);
}
