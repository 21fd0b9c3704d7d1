use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "card-extract")]
#[command(about = "名刺画像から連絡先を抽出するクライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 抽出サーバーのURL（環境変数・設定ファイルより優先）
    #[arg(long, global = true)]
    pub server: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 名刺画像をアップロードして連絡先を抽出
    Extract {
        /// 画像ファイルまたはフォルダ
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// 抽出結果を保存するJSONファイル
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// CSVを保存するフォルダ
        #[arg(long)]
        csv: Option<PathBuf>,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// 保存済みの抽出結果JSONからCSVを生成
    Export {
        /// 入力JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力フォルダ
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// サーバー側の抽出結果をリセット
    Clear,

    /// 設定を表示/編集
    Config {
        /// 抽出サーバーのURLを設定
        #[arg(long)]
        set_server: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
