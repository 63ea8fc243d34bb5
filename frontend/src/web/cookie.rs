//! `document.cookie` 读取

use moduway::interceptor::{CookieJar, find_cookie};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentCookies;

impl DocumentCookies {
    fn raw() -> Option<String> {
        let document = web_sys::window()?.document()?;
        document.dyn_into::<HtmlDocument>().ok()?.cookie().ok()
    }
}

impl CookieJar for DocumentCookies {
    fn cookie(&self, name: &str) -> Option<String> {
        let cookies = Self::raw()?;
        let value = find_cookie(&cookies, name)?;
        // 百分号解码，失败时保留原值
        match js_sys::decode_uri_component(value) {
            Ok(decoded) => Some(String::from(decoded)),
            Err(_) => Some(value.to_string()),
        }
    }
}
