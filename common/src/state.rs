//! 画面状態
//!
//! コントローラーが唯一所有する状態。ここでの遷移はすべて同期的で、
//! 非同期処理の完了結果は世代番号・リクエスト番号で照合してから反映する。

use crate::error::{Error, Result};
use crate::preview::Thumbnail;
use crate::types::{ExtractionRow, TableRow};

/// ファイル選択の世代番号
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(pub u64);

/// アップロードのリクエスト番号（発行順に単調増加）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(pub u64);

#[derive(Debug, Clone)]
pub struct ViewState<F> {
    files: Vec<F>,
    previews: Vec<Thumbnail>,
    table: Vec<TableRow>,
    download_visible: bool,
    generation: u64,
    latest_request: u64,
    in_flight: usize,
}

impl<F> Default for ViewState<F> {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            previews: Vec::new(),
            table: Vec::new(),
            download_visible: false,
            generation: 0,
            latest_request: 0,
            in_flight: 0,
        }
    }
}

impl<F> ViewState<F> {
    pub fn files(&self) -> &[F] {
        &self.files
    }

    pub fn previews(&self) -> &[Thumbnail] {
        &self.previews
    }

    pub fn table(&self) -> &[TableRow] {
        &self.table
    }

    pub fn download_visible(&self) -> bool {
        self.download_visible
    }

    pub fn generation(&self) -> Generation {
        Generation(self.generation)
    }

    pub fn is_uploading(&self) -> bool {
        self.in_flight > 0
    }

    /// ファイル選択を丸ごと置き換え、既存のプレビューを捨てる
    pub fn select(&mut self, files: Vec<F>) -> Generation {
        self.files = files;
        self.previews.clear();
        self.generation += 1;
        Generation(self.generation)
    }

    /// デコードが終わったサムネイルを追加。古い選択のものは捨てて false を返す
    pub fn push_preview(&mut self, generation: Generation, thumbnail: Thumbnail) -> bool {
        if generation.0 != self.generation {
            return false;
        }
        self.previews.push(thumbnail);
        true
    }

    /// アップロード開始。ファイル未選択ならエラー
    pub fn begin_upload(&mut self) -> Result<RequestToken> {
        if self.files.is_empty() {
            return Err(Error::NoFilesSelected);
        }
        self.latest_request += 1;
        self.in_flight += 1;
        Ok(RequestToken(self.latest_request))
    }

    /// アップロード完了。最新のリクエストなら true
    pub fn end_upload(&mut self, token: RequestToken) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        token.0 == self.latest_request
    }

    /// 抽出結果でテーブルを丸ごと置き換え、ダウンロードボタンを表示する
    pub fn render_rows(&mut self, rows: &[ExtractionRow]) {
        self.table = rows.iter().map(TableRow::from).collect();
        self.download_visible = true;
    }

    /// 表示中のテーブルからCSV出力用の行を作る
    pub fn export_rows(&self) -> Vec<ExtractionRow> {
        self.table.iter().map(TableRow::to_row).collect()
    }

    /// 画面を初期状態に戻す。進行中のデコード・アップロードの結果は以後すべて破棄される
    pub fn reset(&mut self) {
        self.files.clear();
        self.previews.clear();
        self.table.clear();
        self.download_visible = false;
        self.generation += 1;
        self.latest_request += 1;
    }
}
