use crate::error::{CardExtractError, Result};
use card_extract_common::SelectedFile;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// ローカルの画像ファイル
#[derive(Debug, Clone)]
pub struct LocalImage {
    pub path: PathBuf,
    pub file_name: String,
}

impl LocalImage {
    pub fn new(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            path: path.to_path_buf(),
            file_name,
        }
    }

    /// 拡張子から推定したMIMEタイプ
    pub fn mime_type(&self) -> Option<&'static str> {
        let ext = self.path.extension()?.to_string_lossy().to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some("image/jpeg"),
            "png" => Some("image/png"),
            "gif" => Some("image/gif"),
            "bmp" => Some("image/bmp"),
            "webp" => Some("image/webp"),
            "svg" => Some("image/svg+xml"),
            _ => None,
        }
    }
}

impl SelectedFile for LocalImage {
    fn name(&self) -> String {
        self.file_name.clone()
    }

    fn media_type(&self) -> Option<String> {
        self.mime_type().map(String::from)
    }

    async fn read_bytes(&self) -> card_extract_common::Result<Vec<u8>> {
        Ok(tokio::fs::read(&self.path).await?)
    }
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp", "svg"];

fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext))
}

/// フォルダ内の画像を列挙（ファイル名順）
pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<LocalImage>> {
    if !folder.is_dir() {
        return Err(CardExtractError::FolderNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut images: Vec<LocalImage> = WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .is_some_and(|ext| is_image_extension(&ext.to_string_lossy()))
        })
        .map(|entry| LocalImage::new(entry.path()))
        .collect();

    images.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(images)
}

/// コマンドライン引数のパスから画像を集める
///
/// ファイルは拡張子にかかわらずそのまま、フォルダは直下（`recursive` なら再帰）の画像を追加する。
pub fn collect_images(paths: &[PathBuf], recursive: bool) -> Result<Vec<LocalImage>> {
    let mut images = Vec::new();

    for path in paths {
        if path.is_dir() {
            images.extend(scan_folder(path, recursive)?);
        } else if path.is_file() {
            images.push(LocalImage::new(path));
        } else {
            return Err(CardExtractError::FileNotFound(path.display().to_string()));
        }
    }

    Ok(images)
}
