//! reqwest による抽出サーバー連携

use crate::error::Result;
use crate::scanner::LocalImage;
use card_extract_common::{
    Collaborator, DownloadRequest, Error, ExtractionRow, SelectedFile, UploadReply, UPLOAD_FIELD,
};
use reqwest::multipart::{Form, Part};
use std::time::Duration;

fn transport(e: reqwest::Error) -> Error {
    Error::Transport(e.to_string())
}

pub struct HttpCollaborator {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCollaborator {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Collaborator for HttpCollaborator {
    type File = LocalImage;

    async fn upload(&self, files: &[LocalImage]) -> card_extract_common::Result<UploadReply> {
        let mut form = Form::new();
        for file in files {
            let bytes = file.read_bytes().await?;
            let mut part = Part::bytes(bytes).file_name(file.name());
            if let Some(mime) = file.mime_type() {
                part = part.mime_str(mime).map_err(transport)?;
            }
            form = form.part(UPLOAD_FIELD, part);
        }

        let body = self
            .client
            .post(self.endpoint("/upload"))
            .multipart(form)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(transport)?
            .text()
            .await
            .map_err(transport)?;

        UploadReply::parse(&body)
    }

    async fn download(&self, rows: &[ExtractionRow]) -> card_extract_common::Result<Vec<u8>> {
        let bytes = self
            .client
            .post(self.endpoint("/download"))
            .json(&DownloadRequest {
                data: rows.to_vec(),
            })
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(transport)?
            .bytes()
            .await
            .map_err(transport)?;

        Ok(bytes.to_vec())
    }

    async fn clear(&self) -> card_extract_common::Result<()> {
        self.client
            .post(self.endpoint("/clear"))
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(transport)?;
        Ok(())
    }
}
