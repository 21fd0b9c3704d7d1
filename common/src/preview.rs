//! プレビュー用サムネイル
//!
//! 画像のバイト列からData URLを作る。形式はマジックバイトで判定し、
//! 画像として認識できないファイルはサムネイルを作らない。

use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// 選択されたファイル1つ分のプレビュー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub file_name: String,
    pub mime_type: String,
    /// "data:image/jpeg;base64,..." 形式
    pub data_url: String,
}

/// バイト列をサムネイルに変換
///
/// 形式はマジックバイトで判定する。判定できない場合（SVGなど）は
/// 選択元が申告した `image/*` のMIMEタイプをそのまま使う。
///
/// # Returns
/// * `Ok(Thumbnail)` - 既知の画像形式、または `image/*` と申告されたファイル
/// * `Err(Error::PreviewDecode)` - 形式を判定できない
pub fn decode_thumbnail(
    file_name: &str,
    bytes: &[u8],
    declared_type: Option<&str>,
) -> Result<Thumbnail> {
    let mime_type = match image::guess_format(bytes) {
        Ok(format) => format.to_mime_type().to_string(),
        Err(e) => match declared_type {
            Some(declared) if declared.starts_with("image/") && !bytes.is_empty() => {
                declared.to_string()
            }
            _ => return Err(Error::PreviewDecode(format!("{}: {}", file_name, e))),
        },
    };

    Ok(Thumbnail {
        file_name: file_name.to_string(),
        data_url: format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes)),
        mime_type,
    })
}
