//! fetch による抽出サーバー連携
//!
//! - `POST /upload`   : multipart（`files` フィールドをファイル数だけ繰り返す）
//! - `POST /download` : JSON `{"data": [...]}` → CSVのバイト列
//! - `POST /clear`    : 本文なし、レスポンスは読まない

use card_extract_common::{
    Collaborator, DownloadRequest, Error, ExtractionRow, Result, SelectedFile, UploadReply,
    UPLOAD_FIELD,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FileList, FormData, Request, RequestInit, RequestMode, Response};

/// ブラウザで選択されたファイル
#[derive(Clone)]
pub struct BrowserFile(web_sys::File);

impl BrowserFile {
    /// `<input type="file">` の選択結果を順序どおりに取り出す
    pub fn from_list(list: &FileList) -> Vec<BrowserFile> {
        (0..list.length())
            .filter_map(|i| list.get(i))
            .map(BrowserFile::from)
            .collect()
    }
}

impl From<web_sys::File> for BrowserFile {
    fn from(file: web_sys::File) -> Self {
        Self(file)
    }
}

impl SelectedFile for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn media_type(&self) -> Option<String> {
        Some(self.0.type_()).filter(|t| !t.is_empty())
    }

    async fn read_bytes(&self) -> Result<Vec<u8>> {
        let file = gloo::file::File::from(self.0.clone());
        gloo::file::futures::read_as_bytes(&file)
            .await
            .map_err(|e| Error::PreviewDecode(format!("{}: {}", self.name(), e)))
    }
}

fn transport_error(value: JsValue) -> Error {
    Error::Transport(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

/// 抽出サーバー
pub struct FetchCollaborator {
    base_url: String,
}

impl FetchCollaborator {
    /// ページと同じオリジンのサーバー
    pub fn same_origin() -> Self {
        Self::new("")
    }

    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST送信（共通処理）。2xx以外はエラー
    async fn post(
        &self,
        path: &str,
        body: Option<&JsValue>,
        content_type: Option<&str>,
    ) -> std::result::Result<Response, JsValue> {
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        if let Some(body) = body {
            opts.set_body(body);
        }

        let request = Request::new_with_str_and_init(&self.endpoint(path), &opts)?;
        if let Some(content_type) = content_type {
            request.headers().set("Content-Type", content_type)?;
        }

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        if !resp.ok() {
            return Err(JsValue::from_str(&format!("{} returned HTTP {}", path, resp.status())));
        }
        Ok(resp)
    }
}

impl Collaborator for FetchCollaborator {
    type File = BrowserFile;

    async fn upload(&self, files: &[BrowserFile]) -> Result<UploadReply> {
        let form = FormData::new().map_err(transport_error)?;
        for file in files {
            form.append_with_blob_and_filename(UPLOAD_FIELD, &file.0, &file.name())
                .map_err(transport_error)?;
        }

        let resp = self
            .post("/upload", Some(&form.into()), None)
            .await
            .map_err(transport_error)?;
        let text = JsFuture::from(resp.text().map_err(transport_error)?)
            .await
            .map_err(transport_error)?;
        let body = text
            .as_string()
            .ok_or_else(|| Error::Protocol("upload reply is not text".to_string()))?;

        UploadReply::parse(&body)
    }

    async fn download(&self, rows: &[ExtractionRow]) -> Result<Vec<u8>> {
        let body = serde_json::to_string(&DownloadRequest {
            data: rows.to_vec(),
        })?;

        let resp = self
            .post("/download", Some(&JsValue::from_str(&body)), Some("application/json"))
            .await
            .map_err(transport_error)?;
        let buffer = JsFuture::from(resp.array_buffer().map_err(transport_error)?)
            .await
            .map_err(transport_error)?;

        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }

    async fn clear(&self) -> Result<()> {
        self.post("/clear", None, None)
            .await
            .map(|_| ())
            .map_err(transport_error)
    }
}
