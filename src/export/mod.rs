//! 行データのJSON入出力

use crate::error::Result;
use card_extract_common::{DownloadRequest, ExtractionRow};
use serde::Deserialize;
use std::path::Path;

/// 配列そのもの、または `/download` と同じ `{"data": [...]}` 形式を受け付ける
#[derive(Deserialize)]
#[serde(untagged)]
enum RowsFile {
    Rows(Vec<ExtractionRow>),
    Request(DownloadRequest),
}

pub fn read_rows_json(path: &Path) -> Result<Vec<ExtractionRow>> {
    let content = std::fs::read_to_string(path)?;
    let rows = match serde_json::from_str(&content)? {
        RowsFile::Rows(rows) => rows,
        RowsFile::Request(request) => request.data,
    };
    Ok(rows)
}

pub fn write_rows_json(path: &Path, rows: &[ExtractionRow]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;
    Ok(())
}
