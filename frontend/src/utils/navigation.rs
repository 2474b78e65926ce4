//! Browser location access. Host builds have no `window`, so they report the
//! root path and only log navigations.

#[cfg(target_arch = "wasm32")]
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_path() -> String {
    "/".to_string()
}

#[cfg(target_arch = "wasm32")]
pub fn navigate_to(path: &str) {
    log::debug!("Navigating to {}", path);
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href(path);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn navigate_to(path: &str) {
    log::debug!("Navigating to {}", path);
}
