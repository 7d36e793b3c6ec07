// 高レベル公開API
// QualityScanEngineを簡単に使用できるようにするための便利な関数

use super::{CancellationFlag, QualityScanEngine};
use crate::{
    core::{Dataset, ProgressReporter, ScanConfig, ScanOutcome, ScanResult},
    image_loader::{standard::StandardImageLoader, ImageLoaderBackend},
    services::{ConsoleProgressReporter, DefaultScanConfig, NoOpProgressReporter},
};
use std::path::Path;

/// アノテーションファイルを読み込んでスキャンする
///
/// データセットの読み込み失敗は`ScanError::DatasetLoadError`として返る。
pub async fn scan_annotations_file<L, C, R>(
    annotations_path: &Path,
    image_dir: &Path,
    engine: &QualityScanEngine<L, C, R>,
    cancel: CancellationFlag,
) -> ScanResult<ScanOutcome>
where
    L: ImageLoaderBackend + 'static,
    C: ScanConfig,
    R: ProgressReporter + 'static,
{
    let dataset = Dataset::from_json_file(annotations_path)?;
    engine
        .scan_with_cancellation(&dataset, image_dir, cancel)
        .await
}

/// QualityScanEngine作成のヘルパー関数
///
/// デフォルト設定での簡単なエンジン作成
pub fn create_default_scan_engine(
) -> QualityScanEngine<StandardImageLoader, DefaultScanConfig, ConsoleProgressReporter> {
    QualityScanEngine::new(
        StandardImageLoader::new(),
        DefaultScanConfig::default(),
        ConsoleProgressReporter::new(),
    )
}

/// QualityScanEngine作成のヘルパー関数（静音版）
///
/// テストやバックグラウンド処理用の静音エンジン作成
pub fn create_quiet_scan_engine(
) -> QualityScanEngine<StandardImageLoader, DefaultScanConfig, NoOpProgressReporter> {
    QualityScanEngine::new(
        StandardImageLoader::new(),
        DefaultScanConfig::default().with_progress_reporting(false),
        NoOpProgressReporter::new(),
    )
}
