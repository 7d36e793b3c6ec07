// 中断処理の統合テスト
use crate::fixtures::DatasetFixture;
use async_trait::async_trait;
use coco_quality::{
    core::{Dataset, ProgressReporter, ScanError, ScanStatus, ScanSummary},
    engine::{CancellationFlag, QualityScanEngine},
    image_loader::{standard::StandardImageLoader, ImageLoaderBackend, LoadError},
    services::{DefaultScanConfig, NoOpProgressReporter},
};
use image::DynamicImage;
use std::path::Path;
use std::time::Duration;

/// 指定件数の結果を受け取った時点で中断フラグを立てるレポーター
struct CancelAfter {
    flag: CancellationFlag,
    after: usize,
}

#[async_trait]
impl ProgressReporter for CancelAfter {
    async fn report_started(&self, _total_units: usize) {}

    async fn report_progress(&self, completed: usize, _total: usize, _file_name: &str) {
        if completed >= self.after {
            self.flag.cancel();
        }
    }

    async fn report_failure(&self, _file_name: &str, _error: &str) {}

    async fn report_completed(&self, _summary: &ScanSummary) {}
}

/// 読み込みを遅延させるローダー
struct SlowLoader {
    inner: StandardImageLoader,
    delay: Duration,
}

impl ImageLoaderBackend for SlowLoader {
    fn load(&self, path: &Path) -> Result<DynamicImage, LoadError> {
        std::thread::sleep(self.delay);
        self.inner.load(path)
    }

    fn strategy_name(&self) -> &'static str {
        "slow"
    }
}

fn dataset_of(count: usize) -> (DatasetFixture, Dataset) {
    let mut fixture = DatasetFixture::new();
    for i in 0..count {
        fixture.add_gray_image(&format!("img_{i:03}.png"), 64, 48, 10);
    }
    fixture.write();
    let dataset = Dataset::from_json_file(&fixture.annotations_path()).unwrap();
    (fixture, dataset)
}

#[tokio::test]
async fn test_cancel_before_start_dispatches_nothing() {
    let (fixture, dataset) = dataset_of(5);
    let engine = QualityScanEngine::new(
        StandardImageLoader::new(),
        DefaultScanConfig::new(2),
        NoOpProgressReporter::new(),
    );
    let cancel = CancellationFlag::new();
    cancel.cancel();

    let outcome = engine
        .scan_with_cancellation(&dataset, &fixture.image_dir(), cancel)
        .await
        .unwrap();

    assert_eq!(outcome.status, ScanStatus::Cancelled);
    assert_eq!(outcome.summary.completed_units(), 0);
    assert!(matches!(
        outcome.into_report(),
        Err(ScanError::Cancelled { processed: 0, total: 5 })
    ));
}

#[tokio::test]
async fn test_cancel_mid_scan_returns_partial_report() {
    let (fixture, dataset) = dataset_of(40);
    let cancel = CancellationFlag::new();
    let engine = QualityScanEngine::new(
        SlowLoader {
            inner: StandardImageLoader::new(),
            delay: Duration::from_millis(15),
        },
        DefaultScanConfig::new(2).with_batch_size(1).with_buffer_size(1),
        CancelAfter {
            flag: cancel.clone(),
            after: 3,
        },
    );

    let outcome = engine
        .scan_with_cancellation(&dataset, &fixture.image_dir(), cancel)
        .await
        .unwrap();

    assert_eq!(outcome.status, ScanStatus::Cancelled);
    let completed = outcome.summary.completed_units();
    assert!(completed >= 3 && completed < 40, "completed = {completed}");

    // 部分結果は処理済みの画像のみを含む
    let partial = outcome.partial_report();
    assert_eq!(partial.low_resolution.len(), completed);
    assert_eq!(partial.poor_lighting.len(), completed);
}

#[tokio::test]
async fn test_flag_raised_after_completion_keeps_completed_status() {
    let (fixture, dataset) = dataset_of(3);
    let cancel = CancellationFlag::new();
    let engine = QualityScanEngine::new(
        StandardImageLoader::new(),
        DefaultScanConfig::new(1).with_batch_size(10),
        CancelAfter {
            flag: cancel.clone(),
            after: 3,
        },
    );

    let outcome = engine
        .scan_with_cancellation(&dataset, &fixture.image_dir(), cancel.clone())
        .await
        .unwrap();

    assert!(cancel.is_cancelled());
    assert_eq!(outcome.status, ScanStatus::Completed);
    assert_eq!(outcome.into_report().unwrap().low_resolution.len(), 3);
}
