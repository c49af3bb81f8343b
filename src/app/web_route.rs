//! Keeps the browser location in step with the active screen.

use crate::checkout::Route;

fn location_path() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

pub(crate) fn current_route() -> Route {
    location_path()
        .map(|path| Route::from_path(&path))
        .unwrap_or_default()
}

pub(crate) fn push_route(route: Route) {
    if location_path().as_deref() == Some(route.path()) {
        return;
    }
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route.path()))
    {
        log::warn!("history.pushState failed: {:?}", e);
    }
}

pub(crate) fn replace_route(route: Route) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(e) =
        history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route.path()))
    {
        log::warn!("history.replaceState failed: {:?}", e);
    }
}
