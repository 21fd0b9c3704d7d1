use anyhow::{bail, Context};
use card_extract::{cli, client, config, export, presenter, scanner};
use card_extract_common::{
    ClearOutcome, Controller, DownloadOutcome, UploadOutcome, CSV_FILE_NAME,
};
use clap::Parser;
use cli::{Cli, Commands};
use client::HttpCollaborator;
use config::{Config, SERVER_ENV};
use presenter::TerminalPresenter;
use std::path::PathBuf;

type CliController = Controller<HttpCollaborator, TerminalPresenter>;

fn connect(config: &Config, server: Option<&str>, output_dir: PathBuf, verbose: bool) -> anyhow::Result<CliController> {
    let base_url = config.resolve_server_url(std::env::var(SERVER_ENV).ok(), server);
    if verbose {
        println!("  サーバー: {}", base_url);
    }
    let collaborator = HttpCollaborator::new(&base_url, config.timeout())
        .context("HTTPクライアントの初期化に失敗")?;
    Ok(Controller::new(collaborator, TerminalPresenter::new(output_dir, verbose)))
}

async fn save_csv(controller: &CliController) -> anyhow::Result<()> {
    match controller.download().await {
        DownloadOutcome::Saved(rows) => {
            let path = controller.presenter().saved_files().pop().unwrap_or_else(|| PathBuf::from(CSV_FILE_NAME));
            println!("✔ CSVを保存: {} ({}件)", path.display(), rows);
            Ok(())
        }
        DownloadOutcome::Failed => bail!("CSVの取得に失敗しました"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Extract { paths, output, csv, recursive } => {
            println!("📇 card-extract - 連絡先抽出\n");

            // 1. 画像収集
            println!("[1/3] 画像をスキャン中...");
            let images = scanner::collect_images(&paths, recursive)?;
            if images.is_empty() {
                return Err(card_extract::error::CardExtractError::NoImagesFound(
                    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", "),
                ).into());
            }
            let output_dir = csv.clone().unwrap_or_else(|| PathBuf::from("."));
            let controller = connect(&config, cli.server.as_deref(), output_dir, cli.verbose)?;

            let previews = controller.select_files(images).await;
            println!("✔ {}枚の画像を選択（プレビュー {}枚）\n", controller.view().files().len(), previews);

            // 2. アップロード
            println!("[2/3] 抽出中...");
            match controller.upload().await {
                UploadOutcome::Rendered(count) => println!("✔ {}件を抽出\n", count),
                UploadOutcome::Rejected => bail!("サーバーが抽出を拒否しました"),
                UploadOutcome::Failed => bail!("アップロードに失敗しました"),
                UploadOutcome::Stale | UploadOutcome::NothingSelected => bail!("抽出結果がありません"),
            }

            println!("{}\n", presenter::format_table(controller.view().table()));

            // 3. 保存
            println!("[3/3] 結果を保存中...");
            if let Some(output) = output {
                let rows = controller.view().export_rows();
                export::write_rows_json(&output, &rows)?;
                println!("✔ 抽出結果を保存: {}", output.display());
            }
            if csv.is_some() {
                save_csv(&controller).await?;
            }

            println!("\n✅ 完了");
        }

        Commands::Export { input, output } => {
            println!("📄 card-extract - CSV出力\n");

            let rows = export::read_rows_json(&input)
                .with_context(|| format!("抽出結果の読み込みに失敗: {}", input.display()))?;
            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            let controller = connect(&config, cli.server.as_deref(), output_dir, cli.verbose)?;

            controller.load_rows(&rows);
            save_csv(&controller).await?;

            println!("\n✅ エクスポート完了");
        }

        Commands::Clear => {
            let controller = connect(&config, cli.server.as_deref(), PathBuf::from("."), cli.verbose)?;
            match controller.clear().await {
                ClearOutcome::Synced => println!("✔ サーバーの抽出結果をリセットしました"),
                ClearOutcome::LocalOnly => bail!("サーバーのリセットに失敗しました"),
            }
        }

        Commands::Config { set_server, show } => {
            let mut config = config;

            if let Some(url) = set_server {
                config.set_server_url(url)?;
                println!("✔ サーバーURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  サーバー: {}", config.resolve_server_url(std::env::var(SERVER_ENV).ok(), cli.server.as_deref()));
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                if let Ok(path) = Config::config_path() {
                    println!("  設定ファイル: {}", path.display());
                }
            }
        }
    }

    Ok(())
}
