//! UIコントローラー
//!
//! ファイル選択・アップロード・CSVダウンロード・クリアの4操作を処理する。
//! 通信先（Collaborator）と描画先（Presenter）は注入され、
//! 状態は `ViewState` ひとつにまとめてコントローラーが所有する。
//!
//! 各操作は `&self` を取るので、シングルスレッドのエグゼキュータ上で
//! 同時に複数走らせることができる。`RefCell` の借用を `.await` をまたいで
//! 保持することはない。

use std::cell::{Ref, RefCell};

use futures::stream::{FuturesUnordered, StreamExt};

use crate::error::{Action, Error, Notice, Result};
use crate::preview::{decode_thumbnail, Thumbnail};
use crate::state::ViewState;
use crate::types::{ExtractionRow, UploadReply, CSV_FILE_NAME};

/// ユーザーが選択したファイル
#[allow(async_fn_in_trait)]
pub trait SelectedFile: Clone {
    fn name(&self) -> String;

    /// 選択元が申告するMIMEタイプ（ブラウザの `File.type` など）
    fn media_type(&self) -> Option<String> {
        None
    }

    async fn read_bytes(&self) -> Result<Vec<u8>>;
}

/// 抽出サーバー（`/upload`, `/download`, `/clear`）
#[allow(async_fn_in_trait)]
pub trait Collaborator {
    type File: SelectedFile;

    async fn upload(&self, files: &[Self::File]) -> Result<UploadReply>;

    /// 行データを送り、CSVのバイト列を受け取る
    async fn download(&self, rows: &[ExtractionRow]) -> Result<Vec<u8>>;

    async fn clear(&self) -> Result<()>;
}

/// 画面への反映先
pub trait Presenter<F> {
    /// 状態が変わるたびに呼ばれる
    fn render(&self, view: &ViewState<F>);

    fn notify(&self, notice: &Notice);

    /// 「名前を付けて保存」
    fn save_file(&self, file_name: &str, bytes: &[u8]) -> Result<()>;
}

/// アップロードの結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// テーブルを描画した（行数）
    Rendered(usize),
    Rejected,
    /// 後発のリクエストに追い越されたため破棄
    Stale,
    Failed,
    NothingSelected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// CSVを保存した（送信した行数）
    Saved(usize),
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Synced,
    /// サーバーへの通知は失敗したが画面はリセット済み
    LocalOnly,
}

pub struct Controller<C, P>
where
    C: Collaborator,
    P: Presenter<C::File>,
{
    collaborator: C,
    presenter: P,
    state: RefCell<ViewState<C::File>>,
}

impl<C, P> Controller<C, P>
where
    C: Collaborator,
    P: Presenter<C::File>,
{
    pub fn new(collaborator: C, presenter: P) -> Self {
        Self {
            collaborator,
            presenter,
            state: RefCell::new(ViewState::default()),
        }
    }

    pub fn view(&self) -> Ref<'_, ViewState<C::File>> {
        self.state.borrow()
    }

    pub fn collaborator(&self) -> &C {
        &self.collaborator
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn is_uploading(&self) -> bool {
        self.state.borrow().is_uploading()
    }

    fn render(&self) {
        let state = self.state.borrow();
        self.presenter.render(&state);
    }

    fn report(&self, action: Action, error: &Error) {
        self.presenter.notify(&Notice::from_error(action, error));
    }

    /// ファイル選択の変更
    ///
    /// 既存のプレビューを消してから、各ファイルを並行して読み込み、
    /// 読み込みが終わった順にサムネイルを追加する。
    /// 画像として読めなかったファイルはログに残すだけでサムネイルは作らない。
    ///
    /// # Returns
    /// この選択で追加されたサムネイルの数
    pub async fn select_files(&self, files: Vec<C::File>) -> usize {
        let generation = self.state.borrow_mut().select(files.clone());
        self.render();

        let mut decodes: FuturesUnordered<_> = files
            .into_iter()
            .map(|file| async move {
                let name = file.name();
                let bytes = file.read_bytes().await?;
                decode_thumbnail(&name, &bytes, file.media_type().as_deref())
            })
            .collect();

        let mut shown = 0;
        while let Some(decoded) = decodes.next().await {
            let thumbnail: Thumbnail = match decoded {
                Ok(thumbnail) => thumbnail,
                Err(e) => {
                    // 古い選択の失敗は結果ごと捨てる
                    if self.state.borrow().generation() == generation {
                        self.report(Action::Preview, &e);
                    }
                    continue;
                }
            };

            let accepted = self.state.borrow_mut().push_preview(generation, thumbnail);
            if accepted {
                shown += 1;
                self.render();
            }
        }
        shown
    }

    /// 選択中のファイルをアップロードし、結果をテーブルに描画する
    pub async fn upload(&self) -> UploadOutcome {
        let begun = {
            let mut state = self.state.borrow_mut();
            state
                .begin_upload()
                .map(|token| (token, state.files().to_vec()))
        };
        let (token, files) = match begun {
            Ok(begun) => begun,
            Err(e) => {
                self.report(Action::Upload, &e);
                return UploadOutcome::NothingSelected;
            }
        };
        self.render();

        let reply = self.collaborator.upload(&files).await;

        let latest = self.state.borrow_mut().end_upload(token);
        if !latest {
            self.presenter.notify(&Notice::stale(token.0));
            self.render();
            return UploadOutcome::Stale;
        }

        let outcome = match reply {
            Ok(UploadReply::Rows(rows)) => {
                self.state.borrow_mut().render_rows(&rows);
                UploadOutcome::Rendered(rows.len())
            }
            Ok(UploadReply::Rejected(message)) => {
                self.report(Action::Upload, &Error::Rejected(message));
                UploadOutcome::Rejected
            }
            Err(e) => {
                self.report(Action::Upload, &e);
                UploadOutcome::Failed
            }
        };
        self.render();
        outcome
    }

    /// 表示中のテーブルをCSVとしてダウンロードする
    pub async fn download(&self) -> DownloadOutcome {
        let rows = self.state.borrow().export_rows();

        let saved = match self.collaborator.download(&rows).await {
            Ok(bytes) => self.presenter.save_file(CSV_FILE_NAME, &bytes),
            Err(e) => Err(e),
        };

        match saved {
            Ok(()) => DownloadOutcome::Saved(rows.len()),
            Err(e) => {
                self.report(Action::Download, &e);
                DownloadOutcome::Failed
            }
        }
    }

    /// サーバーにリセットを通知し、結果にかかわらず画面を初期状態に戻す
    pub async fn clear(&self) -> ClearOutcome {
        let remote = self.collaborator.clear().await;

        self.state.borrow_mut().reset();
        self.render();

        match remote {
            Ok(()) => ClearOutcome::Synced,
            Err(e) => {
                self.report(Action::Clear, &e);
                ClearOutcome::LocalOnly
            }
        }
    }

    /// 保存済みの行データをテーブルに読み込む（CSV再出力用）
    pub fn load_rows(&self, rows: &[ExtractionRow]) {
        self.state.borrow_mut().render_rows(rows);
        self.render();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{NoticeKind, Severity};
    use crate::types::PLACEHOLDER;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    /// メモリ上のファイル。gate を持つ場合は送信されるまで読み込みが終わらない
    #[derive(Clone)]
    struct MemFile {
        name: String,
        bytes: Vec<u8>,
        gate: Rc<RefCell<Option<oneshot::Receiver<()>>>>,
    }

    impl MemFile {
        fn png(name: &str) -> Self {
            Self {
                name: name.to_string(),
                bytes: PNG.to_vec(),
                gate: Rc::new(RefCell::new(None)),
            }
        }

        fn text(name: &str) -> Self {
            Self {
                bytes: b"not an image".to_vec(),
                ..Self::png(name)
            }
        }

        fn gated(name: &str) -> (Self, oneshot::Sender<()>) {
            let (tx, rx) = oneshot::channel();
            let file = Self::png(name);
            *file.gate.borrow_mut() = Some(rx);
            (file, tx)
        }
    }

    impl SelectedFile for MemFile {
        fn name(&self) -> String {
            self.name.clone()
        }

        async fn read_bytes(&self) -> Result<Vec<u8>> {
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                gate.await.map_err(|e| Error::Transport(e.to_string()))?;
            }
            Ok(self.bytes.clone())
        }
    }

    type PendingReply = oneshot::Receiver<Result<UploadReply>>;

    #[derive(Default)]
    struct FakeServer {
        replies: RefCell<VecDeque<Result<UploadReply>>>,
        pending: RefCell<VecDeque<PendingReply>>,
        uploads: RefCell<Vec<Vec<String>>>,
        downloads: RefCell<Vec<Vec<ExtractionRow>>>,
        clears: Cell<usize>,
        fail_download: Cell<bool>,
        fail_clear: Cell<bool>,
    }

    impl FakeServer {
        fn replying(reply: Result<UploadReply>) -> Self {
            let server = Self::default();
            server.replies.borrow_mut().push_back(reply);
            server
        }
    }

    impl Collaborator for FakeServer {
        type File = MemFile;

        async fn upload(&self, files: &[MemFile]) -> Result<UploadReply> {
            self.uploads
                .borrow_mut()
                .push(files.iter().map(|f| f.name()).collect());

            let pending = self.pending.borrow_mut().pop_front();
            if let Some(pending) = pending {
                return pending
                    .await
                    .map_err(|e| Error::Transport(e.to_string()))?;
            }
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(Error::Transport("connection refused".to_string())))
        }

        async fn download(&self, rows: &[ExtractionRow]) -> Result<Vec<u8>> {
            self.downloads.borrow_mut().push(rows.to_vec());
            if self.fail_download.get() {
                return Err(Error::Transport("connection reset".to_string()));
            }
            Ok(b"person_name,company_name,email,contact_number\n".to_vec())
        }

        async fn clear(&self) -> Result<()> {
            self.clears.set(self.clears.get() + 1);
            if self.fail_clear.get() {
                return Err(Error::Transport("connection refused".to_string()));
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingPresenter {
        renders: Cell<usize>,
        preview_order: RefCell<Vec<String>>,
        notices: RefCell<Vec<Notice>>,
        saved: RefCell<Vec<(String, Vec<u8>)>>,
    }

    impl RecordingPresenter {
        fn blocking(&self) -> Vec<String> {
            self.notices
                .borrow()
                .iter()
                .filter(|n| n.is_blocking())
                .map(|n| n.message.clone())
                .collect()
        }
    }

    impl Presenter<MemFile> for RecordingPresenter {
        fn render(&self, view: &ViewState<MemFile>) {
            self.renders.set(self.renders.get() + 1);
            *self.preview_order.borrow_mut() =
                view.previews().iter().map(|t| t.file_name.clone()).collect();
        }

        fn notify(&self, notice: &Notice) {
            self.notices.borrow_mut().push(notice.clone());
        }

        fn save_file(&self, file_name: &str, bytes: &[u8]) -> Result<()> {
            self.saved
                .borrow_mut()
                .push((file_name.to_string(), bytes.to_vec()));
            Ok(())
        }
    }

    fn jane() -> ExtractionRow {
        ExtractionRow {
            person_name: Some("Jane Doe".to_string()),
            company_name: Some("Acme".to_string()),
            email: Some("jane@acme.com".to_string()),
            contact_number: Some("555-1234".to_string()),
        }
    }

    fn controller(server: FakeServer) -> Controller<FakeServer, RecordingPresenter> {
        Controller::new(server, RecordingPresenter::default())
    }

    // =============================================
    // ファイル選択
    // =============================================

    #[test]
    fn test_select_two_files_shows_two_previews() {
        let ctl = controller(FakeServer::default());
        let shown = block_on(ctl.select_files(vec![MemFile::png("a.png"), MemFile::png("b.png")]));

        assert_eq!(shown, 2);
        assert_eq!(ctl.view().previews().len(), 2);
        assert_eq!(ctl.view().files().len(), 2);
    }

    #[test]
    fn test_select_undecodable_file_is_silently_skipped() {
        let ctl = controller(FakeServer::default());
        let shown = block_on(ctl.select_files(vec![MemFile::text("a.txt"), MemFile::png("b.png")]));

        assert_eq!(shown, 1);
        assert_eq!(ctl.view().previews()[0].file_name, "b.png");
        assert!(ctl.presenter().blocking().is_empty());

        let notices = ctl.presenter().notices.borrow();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Decode);
        assert_eq!(notices[0].severity, Severity::Logged);
    }

    #[test]
    fn test_previews_follow_completion_order() {
        let ctl = controller(FakeServer::default());
        let (first, first_gate) = MemFile::gated("first.png");
        let (second, second_gate) = MemFile::gated("second.png");

        block_on(async {
            let driver = async {
                second_gate.send(()).expect("送信失敗");
                futures::pending!();
                first_gate.send(()).expect("送信失敗");
            };
            futures::join!(ctl.select_files(vec![first, second]), driver);
        });

        assert_eq!(*ctl.presenter().preview_order.borrow(), ["second.png", "first.png"]);
    }

    #[test]
    fn test_failure_from_superseded_selection_is_not_reported() {
        let ctl = controller(FakeServer::default());
        let (old, old_gate) = MemFile::gated("old.txt");
        let old = MemFile {
            bytes: b"not an image".to_vec(),
            ..old
        };

        block_on(async {
            let newer = async {
                ctl.select_files(vec![MemFile::png("new.png")]).await;
                old_gate.send(()).expect("送信失敗");
            };
            futures::join!(ctl.select_files(vec![old]), newer);
        });

        assert_eq!(*ctl.presenter().preview_order.borrow(), ["new.png"]);
        assert!(ctl.presenter().notices.borrow().is_empty());
    }

    #[test]
    fn test_new_selection_drops_previous_previews() {
        let ctl = controller(FakeServer::default());
        block_on(ctl.select_files(vec![MemFile::png("old.png")]));
        block_on(ctl.select_files(vec![MemFile::png("new.png")]));

        let view = ctl.view();
        assert_eq!(view.previews().len(), 1);
        assert_eq!(view.previews()[0].file_name, "new.png");
    }

    #[test]
    fn test_empty_selection_clears_previews() {
        let ctl = controller(FakeServer::default());
        block_on(ctl.select_files(vec![MemFile::png("a.png")]));
        let shown = block_on(ctl.select_files(vec![]));

        assert_eq!(shown, 0);
        assert!(ctl.view().previews().is_empty());
    }

    // =============================================
    // アップロード
    // =============================================

    #[test]
    fn test_upload_without_files_makes_no_request() {
        let ctl = controller(FakeServer::replying(Ok(UploadReply::Rows(vec![jane()]))));
        let outcome = block_on(ctl.upload());

        assert_eq!(outcome, UploadOutcome::NothingSelected);
        assert!(ctl.collaborator().uploads.borrow().is_empty());
        assert_eq!(ctl.presenter().blocking(), ["Please select at least one image"]);
    }

    #[test]
    fn test_upload_renders_rows_and_shows_download() {
        let ctl = controller(FakeServer::replying(Ok(UploadReply::Rows(vec![jane()]))));
        block_on(ctl.select_files(vec![MemFile::png("a.png"), MemFile::png("b.png")]));

        let outcome = block_on(ctl.upload());

        assert_eq!(outcome, UploadOutcome::Rendered(1));
        assert_eq!(*ctl.collaborator().uploads.borrow(), [vec!["a.png", "b.png"]]);

        let view = ctl.view();
        assert_eq!(view.table().len(), 1);
        assert_eq!(
            view.table()[0].cells,
            ["Jane Doe", "Acme", "jane@acme.com", "555-1234"].map(String::from)
        );
        assert!(view.download_visible());
        assert!(!view.is_uploading());
    }

    #[test]
    fn test_upload_missing_fields_render_placeholder() {
        let rows = vec![
            ExtractionRow {
                person_name: Some("Jane Doe".to_string()),
                ..Default::default()
            },
            ExtractionRow::default(),
            jane(),
        ];
        let ctl = controller(FakeServer::replying(Ok(UploadReply::Rows(rows))));
        block_on(ctl.select_files(vec![MemFile::png("a.png")]));

        assert_eq!(block_on(ctl.upload()), UploadOutcome::Rendered(3));

        let view = ctl.view();
        assert_eq!(view.table().len(), 3);
        assert_eq!(view.table()[0].cells[1], PLACEHOLDER);
        assert!(view.table()[1].cells.iter().all(|c| c == PLACEHOLDER));
    }

    #[test]
    fn test_upload_rejected_keeps_table() {
        let ctl = controller(FakeServer::default());
        ctl.collaborator()
            .replies
            .borrow_mut()
            .extend([Ok(UploadReply::Rows(vec![jane()])), Ok(UploadReply::Rejected("bad image".to_string()))]);
        block_on(ctl.select_files(vec![MemFile::png("a.png")]));
        block_on(ctl.upload());
        let before = ctl.view().table().to_vec();

        let outcome = block_on(ctl.upload());

        assert_eq!(outcome, UploadOutcome::Rejected);
        assert_eq!(ctl.view().table(), before.as_slice());
        assert!(ctl.view().download_visible());
        assert_eq!(ctl.presenter().blocking(), ["bad image"]);
    }

    #[test]
    fn test_upload_rejected_before_any_result_keeps_download_hidden() {
        let ctl = controller(FakeServer::replying(Ok(UploadReply::Rejected("bad image".to_string()))));
        block_on(ctl.select_files(vec![MemFile::png("a.png")]));

        assert_eq!(block_on(ctl.upload()), UploadOutcome::Rejected);
        assert!(ctl.view().table().is_empty());
        assert!(!ctl.view().download_visible());
    }

    #[test]
    fn test_upload_transport_failure_shows_generic_notice() {
        let ctl = controller(FakeServer::default());
        block_on(ctl.select_files(vec![MemFile::png("a.png")]));

        assert_eq!(block_on(ctl.upload()), UploadOutcome::Failed);
        assert!(ctl.view().table().is_empty());
        assert_eq!(ctl.presenter().blocking(), ["An error occurred during upload"]);
    }

    #[test]
    fn test_overlapping_uploads_latest_issued_wins() {
        let ctl = controller(FakeServer::default());
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        ctl.collaborator()
            .pending
            .borrow_mut()
            .extend([first_rx, second_rx]);
        block_on(ctl.select_files(vec![MemFile::png("a.png")]));

        let older = ExtractionRow {
            person_name: Some("Older".to_string()),
            ..Default::default()
        };

        let (first, second) = block_on(async {
            let driver = async {
                assert!(ctl.is_uploading());
                second_tx
                    .send(Ok(UploadReply::Rows(vec![jane()])))
                    .expect("送信失敗");
                futures::pending!();
                first_tx
                    .send(Ok(UploadReply::Rows(vec![older])))
                    .expect("送信失敗");
            };
            let (first, second, ()) = futures::join!(ctl.upload(), ctl.upload(), driver);
            (first, second)
        });

        assert_eq!(first, UploadOutcome::Stale);
        assert_eq!(second, UploadOutcome::Rendered(1));
        assert_eq!(ctl.view().table()[0].cells[0], "Jane Doe");
        assert!(!ctl.is_uploading());
        assert!(ctl
            .presenter()
            .notices
            .borrow()
            .iter()
            .any(|n| n.kind == NoticeKind::Stale));
    }

    // =============================================
    // ダウンロード
    // =============================================

    #[test]
    fn test_download_submits_rendered_rows() {
        let rows = vec![
            jane(),
            ExtractionRow {
                person_name: Some("John Roe".to_string()),
                ..Default::default()
            },
        ];
        let ctl = controller(FakeServer::replying(Ok(UploadReply::Rows(rows))));
        block_on(ctl.select_files(vec![MemFile::png("a.png")]));
        block_on(ctl.upload());

        let outcome = block_on(ctl.download());

        assert_eq!(outcome, DownloadOutcome::Saved(2));
        let downloads = ctl.collaborator().downloads.borrow();
        assert_eq!(downloads.len(), 1);
        assert_eq!(downloads[0][0], jane());
        assert_eq!(downloads[0][1].person_name.as_deref(), Some("John Roe"));
        assert_eq!(downloads[0][1].email.as_deref(), Some(PLACEHOLDER));

        let saved = ctl.presenter().saved.borrow();
        assert_eq!(saved[0].0, "business_cards.csv");
    }

    #[test]
    fn test_download_failure_reports_notice() {
        let ctl = controller(FakeServer::default());
        ctl.collaborator().fail_download.set(true);
        ctl.load_rows(&[jane()]);

        assert_eq!(block_on(ctl.download()), DownloadOutcome::Failed);
        assert!(ctl.presenter().saved.borrow().is_empty());
        assert_eq!(ctl.presenter().blocking(), ["An error occurred during download"]);
    }

    // =============================================
    // クリア
    // =============================================

    #[test]
    fn test_clear_resets_everything() {
        let ctl = controller(FakeServer::replying(Ok(UploadReply::Rows(vec![jane()]))));
        block_on(ctl.select_files(vec![MemFile::png("a.png")]));
        block_on(ctl.upload());

        assert_eq!(block_on(ctl.clear()), ClearOutcome::Synced);

        let view = ctl.view();
        assert!(view.files().is_empty());
        assert!(view.previews().is_empty());
        assert!(view.table().is_empty());
        assert!(!view.download_visible());
    }

    #[test]
    fn test_clear_resets_even_when_server_fails() {
        let ctl = controller(FakeServer::replying(Ok(UploadReply::Rows(vec![jane()]))));
        ctl.collaborator().fail_clear.set(true);
        block_on(ctl.select_files(vec![MemFile::png("a.png")]));
        block_on(ctl.upload());

        assert_eq!(block_on(ctl.clear()), ClearOutcome::LocalOnly);

        let view = ctl.view();
        assert!(view.files().is_empty());
        assert!(view.table().is_empty());
        assert!(!view.download_visible());
        drop(view);
        assert_eq!(ctl.presenter().blocking(), ["An error occurred while clearing"]);
    }

    #[test]
    fn test_clear_twice_is_same_as_once() {
        let ctl = controller(FakeServer::replying(Ok(UploadReply::Rows(vec![jane()]))));
        block_on(ctl.select_files(vec![MemFile::png("a.png")]));
        block_on(ctl.upload());

        block_on(ctl.clear());
        let once = (
            ctl.view().files().len(),
            ctl.view().previews().to_vec(),
            ctl.view().table().to_vec(),
            ctl.view().download_visible(),
        );
        block_on(ctl.clear());
        let twice = (
            ctl.view().files().len(),
            ctl.view().previews().to_vec(),
            ctl.view().table().to_vec(),
            ctl.view().download_visible(),
        );

        assert_eq!(once, twice);
        assert_eq!(ctl.collaborator().clears.get(), 2);
    }

    #[test]
    fn test_clear_during_upload_discards_reply() {
        let ctl = controller(FakeServer::default());
        let (tx, rx) = oneshot::channel();
        ctl.collaborator().pending.borrow_mut().push_back(rx);
        block_on(ctl.select_files(vec![MemFile::png("a.png")]));

        let outcome = block_on(async {
            let driver = async {
                ctl.clear().await;
                tx.send(Ok(UploadReply::Rows(vec![jane()]))).expect("送信失敗");
            };
            let (outcome, ()) = futures::join!(ctl.upload(), driver);
            outcome
        });

        assert_eq!(outcome, UploadOutcome::Stale);
        assert!(ctl.view().table().is_empty());
        assert!(!ctl.view().download_visible());
    }

    #[test]
    fn test_every_change_is_rendered() {
        let ctl = controller(FakeServer::replying(Ok(UploadReply::Rows(vec![jane()]))));
        block_on(ctl.select_files(vec![MemFile::png("a.png")]));
        let after_select = ctl.presenter().renders.get();
        assert!(after_select >= 2);

        block_on(ctl.upload());
        assert!(ctl.presenter().renders.get() > after_select);
    }
}
