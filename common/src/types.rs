//! 抽出結果とサーバー通信の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - ExtractionRow: サーバーが返す名刺1枚分の連絡先
//! - UploadReply: `/upload` のレスポンス
//! - DownloadRequest: `/download` のリクエスト本文
//! - TableRow: テーブルに表示された文字列（CSV出力の唯一の情報源）

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 値が無いセルに表示するプレースホルダ
pub const PLACEHOLDER: &str = "N/A";

/// ダウンロードしたCSVの保存名
pub const CSV_FILE_NAME: &str = "business_cards.csv";

/// multipartでファイルを送るフィールド名（ファイル数だけ繰り返す）
pub const UPLOAD_FIELD: &str = "files";

/// テーブルの列（サーバーのJSONキーと同じ順序）
pub const COLUMNS: [&str; 4] = ["person_name", "company_name", "email", "contact_number"];

/// 列見出し
pub const COLUMN_LABELS: [&str; 4] = ["Name", "Company", "Email", "Contact"];

/// 名刺1枚分の抽出結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionRow {
    #[serde(deserialize_with = "lenient_text")]
    pub person_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub company_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub contact_number: Option<String>,
}

/// 抽出値を文字列として読む
///
/// 値はモデルの出力そのままなので、電話番号が数値で返ることもある。
/// 数値・真偽値は文字列に、配列・オブジェクトはJSON表記にする。
/// `null`・`false`・`0` は値なしとして扱う。
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    };
    Ok(text)
}

impl ExtractionRow {
    /// 表示用の4セル。欠損・null・空文字はプレースホルダになる
    pub fn cells(&self) -> [String; 4] {
        [
            &self.person_name,
            &self.company_name,
            &self.email,
            &self.contact_number,
        ]
        .map(|field| match field.as_deref() {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => PLACEHOLDER.to_string(),
        })
    }
}

/// テーブルに描画された1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: [String; 4],
}

impl From<&ExtractionRow> for TableRow {
    fn from(row: &ExtractionRow) -> Self {
        Self { cells: row.cells() }
    }
}

impl TableRow {
    /// 表示中の文字列をそのまま4フィールドに詰め直す
    pub fn to_row(&self) -> ExtractionRow {
        let [person_name, company_name, email, contact_number] = self.cells.clone();
        ExtractionRow {
            person_name: Some(person_name),
            company_name: Some(company_name),
            email: Some(email),
            contact_number: Some(contact_number),
        }
    }
}

/// `/upload` のレスポンス本文（JSONのまま）
#[derive(Deserialize)]
struct RawUploadReply {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    data: Option<Vec<ExtractionRow>>,
}

/// `/upload` のレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawUploadReply")]
pub enum UploadReply {
    Rows(Vec<ExtractionRow>),
    Rejected(String),
}

impl TryFrom<RawUploadReply> for UploadReply {
    type Error = String;

    fn try_from(raw: RawUploadReply) -> std::result::Result<Self, Self::Error> {
        // error と data が両方ある場合は error を優先
        match (raw.error, raw.data) {
            (Some(error), _) if !error.is_empty() => Ok(UploadReply::Rejected(error)),
            (_, Some(rows)) => Ok(UploadReply::Rows(rows)),
            _ => Err("response has neither `error` nor `data`".to_string()),
        }
    }
}

impl UploadReply {
    /// レスポンス本文をパース
    ///
    /// # Returns
    /// * `Ok(UploadReply)` - `error` または `data` を含むJSON
    /// * `Err(Error::Protocol)` - JSONでない、またはどちらのキーも無い
    pub fn parse(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| Error::Protocol(format!("upload reply: {}", e)))
    }
}

/// `/download` のリクエスト本文
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub data: Vec<ExtractionRow>,
}
