use crate::core::{Dataset, ScanConfig, ScanOutcome, ScanStatus};
use crate::engine::{CancellationFlag, QualityScanEngine};
use crate::image_loader::standard::StandardImageLoader;
use crate::services::{write_report_json, ConsoleProgressReporter, DefaultScanConfig};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration struct for scan command to reduce argument count
#[derive(Debug, Clone)]
pub struct ScanCommandConfig {
    pub annotations: PathBuf,
    pub images: PathBuf,
    pub workers: Option<usize>,
    pub batch_size: usize,
    pub buffer_size: usize,
    pub timeout_ms: Option<u64>,
    pub output: Option<PathBuf>,
    pub quiet: bool,
}

impl ScanCommandConfig {
    /// CLIフラグで既定値を上書きした実行設定
    pub fn to_scan_config(&self) -> DefaultScanConfig {
        let mut config = DefaultScanConfig::default()
            .with_batch_size(self.batch_size)
            .with_buffer_size(self.buffer_size)
            .with_per_image_timeout(self.timeout_ms.map(Duration::from_millis))
            .with_progress_reporting(!self.quiet);

        if let Some(workers) = self.workers {
            config = config.with_worker_count(workers);
        }
        config
    }
}

/// Execute scan command
///
/// Ctrl+Cで中断した場合も、それまでの部分結果を表示・出力した上で
/// `ScanStatus::Cancelled`を返す。
pub async fn execute_scan(config: ScanCommandConfig) -> Result<ScanStatus> {
    println!("🔍 品質スキャン開始");
    println!("   - アノテーション: {}", config.annotations.display());
    println!("   - 画像ディレクトリ: {}", config.images.display());

    let dataset = Dataset::from_json_file(&config.annotations)
        .context("アノテーションファイルを読み込めませんでした")?;

    let reporter = if config.quiet {
        ConsoleProgressReporter::quiet()
    } else {
        ConsoleProgressReporter::new()
    };
    let engine = QualityScanEngine::new(StandardImageLoader::new(), config.to_scan_config(), reporter);

    // Display engine configuration
    println!("⚙️  処理設定:");
    println!("   - ワーカー数: {}", engine.config().worker_count());
    println!("   - バッチサイズ: {}", engine.config().batch_size());
    println!("   - バッファサイズ: {}", engine.config().channel_buffer_size());
    if let Some(timeout) = engine.config().per_image_timeout() {
        println!("   - タイムアウト: {}ms/画像", timeout.as_millis());
    }

    // Ctrl+Cで中断フラグを立てる
    let cancel = CancellationFlag::new();
    let signal_flag = cancel.clone();
    let signal_task = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\n⏹️  中断要求を受け付けました。処理中の画像を終えて停止します...");
            signal_flag.cancel();
        }
    });

    let result = engine
        .scan_with_cancellation(&dataset, &config.images, cancel)
        .await;
    signal_task.abort();
    let outcome = result.context("スキャンに失敗しました")?;

    print_outcome(&outcome);

    if let Some(output) = &config.output {
        write_report_json(output, &outcome).await?;
        println!("📄 結果は {} に保存されました", output.display());
    }

    Ok(outcome.status)
}

fn print_outcome(outcome: &ScanOutcome) {
    let summary = &outcome.summary;

    match outcome.status {
        ScanStatus::Completed => println!("✅ スキャン完了!"),
        ScanStatus::Cancelled => println!(
            "⏹️  スキャン中断 ({}/{} 件処理済み、以下は部分結果です)",
            summary.completed_units(),
            summary.total_units
        ),
    }

    println!();
    println!("{}", outcome.report.counts());
    println!();

    println!("   - 評価済み: {}", summary.evaluated_units);
    if summary.skipped_units > 0 {
        println!(
            "⚠️  {}枚の画像をスキップしました (未検出: {}, デコード不可: {}, タイムアウト: {})",
            summary.skipped_units,
            summary.skipped_missing,
            summary.skipped_undecodable,
            summary.skipped_timed_out
        );
    }
    if summary.failed_units > 0 {
        println!("⚠️  {}枚の画像でエラーが発生しました", summary.failed_units);
        for failure in &summary.failures {
            println!("   - {}: {}", failure.file_name, failure.error);
        }
    }
    println!("   - 処理時間: {}ms", summary.elapsed_ms);
}
