//! `navigator.share` in the browser.
//!
//! web-sys only exposes the Web Share methods behind `web_sys_unstable_apis`,
//! so the call goes through `js_sys::Reflect` on the navigator object.

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::{ShareCapability, ShareData, ShareError};

const SHARE: &str = "share";

#[derive(Debug, Clone, Copy, Default)]
pub struct NavigatorShare;

fn navigator() -> Option<web_sys::Navigator> {
    web_sys::window().map(|w| w.navigator())
}

/// Web Share dictionary `{ title, text, url }`.
fn to_js(data: &ShareData) -> Result<Object, JsValue> {
    let init = Object::new();
    Reflect::set(&init, &"title".into(), &data.title.as_str().into())?;
    Reflect::set(&init, &"text".into(), &data.text.as_str().into())?;
    Reflect::set(&init, &"url".into(), &data.url.as_str().into())?;
    Ok(init)
}

fn string_prop(value: &JsValue, key: &str) -> Option<String> {
    Reflect::get(value, &key.into()).ok().and_then(|v| v.as_string())
}

fn from_js(err: JsValue) -> ShareError {
    let name = string_prop(&err, "name").unwrap_or_else(|| "Error".to_string());
    let message = string_prop(&err, "message")
        .or_else(|| err.as_string())
        .unwrap_or_default();
    ShareError::from_dom(&name, &message)
}

async fn invoke(data: ShareData) -> Result<(), ShareError> {
    let navigator = navigator().ok_or(ShareError::Unsupported)?;
    let share = Reflect::get(&navigator, &SHARE.into())
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or(ShareError::Unsupported)?;

    let init = to_js(&data).map_err(from_js)?;
    let promise: Promise = share.call1(&navigator, &init).map_err(from_js)?.dyn_into().map_err(from_js)?;
    JsFuture::from(promise).await.map(|_| ()).map_err(from_js)
}

impl ShareCapability for NavigatorShare {
    fn is_supported(&self) -> bool {
        navigator()
            .and_then(|n| Reflect::has(&n, &SHARE.into()).ok())
            .unwrap_or(false)
    }

    fn share(&self, data: ShareData) -> LocalBoxFuture<'static, Result<(), ShareError>> {
        invoke(data).boxed_local()
    }
}
