//! 端末への反映
//!
//! 通知は標準エラーへ、CSVは出力フォルダへ保存する。

use crate::scanner::LocalImage;
use card_extract_common::{Notice, Presenter, Severity, TableRow, ViewState, COLUMN_LABELS};
use std::cell::RefCell;
use std::path::PathBuf;

pub struct TerminalPresenter {
    output_dir: PathBuf,
    verbose: bool,
    blocking: RefCell<Vec<String>>,
    saved: RefCell<Vec<PathBuf>>,
}

impl TerminalPresenter {
    pub fn new(output_dir: PathBuf, verbose: bool) -> Self {
        Self {
            output_dir,
            verbose,
            blocking: RefCell::new(Vec::new()),
            saved: RefCell::new(Vec::new()),
        }
    }

    /// これまでにユーザーへ提示した通知
    pub fn blocking_notices(&self) -> Vec<String> {
        self.blocking.borrow().clone()
    }

    pub fn saved_files(&self) -> Vec<PathBuf> {
        self.saved.borrow().clone()
    }
}

impl Presenter<LocalImage> for TerminalPresenter {
    fn render(&self, view: &ViewState<LocalImage>) {
        if self.verbose {
            println!(
                "  previews {}/{}, rows {}, download {}",
                view.previews().len(),
                view.files().len(),
                view.table().len(),
                if view.download_visible() { "ready" } else { "hidden" },
            );
        }
    }

    fn notify(&self, notice: &Notice) {
        match notice.severity {
            Severity::Blocking => {
                eprintln!("✖ {}", notice.message);
                self.blocking.borrow_mut().push(notice.message.clone());
            }
            Severity::Logged => {
                if self.verbose {
                    eprintln!("  {}", notice.message);
                }
            }
        }

        if self.verbose {
            if let Some(detail) = &notice.detail {
                eprintln!("    {}", detail);
            }
        }
    }

    fn save_file(&self, file_name: &str, bytes: &[u8]) -> card_extract_common::Result<()> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(file_name);
        std::fs::write(&path, bytes)?;
        self.saved.borrow_mut().push(path);
        Ok(())
    }
}

/// テーブルを列幅をそろえて整形
pub fn format_table(rows: &[TableRow]) -> String {
    let mut widths = COLUMN_LABELS.map(|label| label.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(&row.cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: [&str; 4]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_line(COLUMN_LABELS)];
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in rows {
        lines.push(format_line([
            row.cells[0].as_str(),
            row.cells[1].as_str(),
            row.cells[2].as_str(),
            row.cells[3].as_str(),
        ]));
    }
    lines.join("\n")
}
