//! Blob URL によるファイル保存
//!
//! Blob から object URL を作り、一時的な `<a download>` をクリックして保存させる。
//! object URL は `ObjectUrl` が所有し、スコープを抜けるとき必ず解放される。

use card_extract_common::{Error, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement};

fn browser_error(context: &str, value: JsValue) -> Error {
    Error::Io(std::io::Error::other(format!("{}: {:?}", context, value)))
}

/// `URL.createObjectURL` で作ったURL。drop時に revoke する
pub struct ObjectUrl {
    url: String,
    revoke: fn(&str),
}

impl ObjectUrl {
    pub fn for_blob(blob: &Blob) -> Result<Self> {
        let url = web_sys::Url::create_object_url_with_blob(blob)
            .map_err(|e| browser_error("createObjectURL", e))?;
        Ok(Self {
            url,
            revoke: revoke_object_url,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        (self.revoke)(&self.url);
    }
}

fn revoke_object_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}

/// バイト列をファイルとして保存させる
pub fn save_bytes(data: &[u8], filename: &str, mime_type: &str) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| browser_error("window", JsValue::NULL))?;
    let document = window
        .document()
        .ok_or_else(|| browser_error("document", JsValue::NULL))?;
    let body = document
        .body()
        .ok_or_else(|| browser_error("document body", JsValue::NULL))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(data));

    let opts = BlobPropertyBag::new();
    opts.set_type(mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
        .map_err(|e| browser_error("Blob", e))?;

    let url = ObjectUrl::for_blob(&blob)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| browser_error("createElement", e))?
        .dyn_into()
        .map_err(|e| browser_error("HtmlAnchorElement", e.into()))?;
    anchor.set_href(url.as_str());
    anchor.set_download(filename);

    body.append_child(&anchor)
        .map_err(|e| browser_error("appendChild", e))?;
    anchor.click();
    let _ = body.remove_child(&anchor);

    Ok(())
}
