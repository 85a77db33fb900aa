use wasm_bindgen::JsValue;

const CAPTURE_ENTRY_POINTS: [&str; 4] = [
    "mediaDevices",
    "getUserMedia",
    "webkitGetUserMedia",
    "mozGetUserMedia",
];

/// Whether the browser can capture audio/video at all.
pub fn has_user_media() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let navigator = window.navigator();

    CAPTURE_ENTRY_POINTS.iter().any(|name| {
        js_sys::Reflect::has(&navigator, &JsValue::from_str(name)).unwrap_or(false)
    })
}
