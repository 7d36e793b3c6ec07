// エラーハンドリング統合テスト
use crate::fixtures::DatasetFixture;
use coco_quality::{
    core::{Dataset, ScanError},
    engine::{create_quiet_scan_engine, scan_annotations_file, CancellationFlag, QualityScanEngine},
    image_loader::standard::StandardImageLoader,
    services::{DefaultScanConfig, NoOpProgressReporter},
};
use std::fs;

#[tokio::test]
async fn test_missing_and_corrupted_images_are_skipped() {
    let mut fixture = DatasetFixture::new();
    let dark = fixture.add_gray_image("dark.png", 800, 600, 5);
    let missing = fixture.add_missing_image("missing.png");
    let corrupted = fixture.add_corrupted_image("corrupted.png");
    fixture.add_box(dark, 1, [0.0, 0.0, 10.0, 10.0]);
    fixture.add_box(missing, 1, [0.0, 0.0, 1.0, 1.0]);
    fixture.add_box(corrupted, 1, [0.0, 0.0, 1.0, 1.0]);
    fixture.write();

    let engine = create_quiet_scan_engine();
    let outcome = scan_annotations_file(
        &fixture.annotations_path(),
        &fixture.image_dir(),
        &engine,
        CancellationFlag::new(),
    )
    .await
    .unwrap();

    assert!(outcome.is_complete());
    assert_eq!(outcome.summary.skipped_missing, 1);
    assert_eq!(outcome.summary.skipped_undecodable, 1);
    assert_eq!(outcome.summary.failed_units, 0);

    // スキップされた画像は結果に一切現れない
    let report = outcome.into_report().unwrap();
    assert_eq!(report.poor_lighting, vec!["dark.png"]);
    assert!(report.low_resolution.is_empty());
    assert_eq!(report.too_small.len(), 1);
    assert_eq!(report.too_small[0].file_name, "dark.png");
}

#[tokio::test]
async fn test_missing_annotation_file_is_fatal() {
    let fixture = DatasetFixture::new();
    let engine = create_quiet_scan_engine();

    let result = scan_annotations_file(
        &fixture.annotations_path(),
        &fixture.image_dir(),
        &engine,
        CancellationFlag::new(),
    )
    .await;

    assert!(matches!(result, Err(ScanError::DatasetLoadError { .. })));
}

#[test]
fn test_malformed_annotation_file_is_fatal() {
    let fixture = DatasetFixture::new();
    fs::write(fixture.annotations_path(), "{ not json").unwrap();

    let result = Dataset::from_json_file(&fixture.annotations_path());

    match result {
        Err(error) => assert!(error.is_fatal()),
        Ok(_) => panic!("Expected malformed dataset to fail"),
    }
}

#[tokio::test]
async fn test_missing_image_directory_fails_before_dispatch() {
    let mut fixture = DatasetFixture::new();
    fixture.add_gray_image("a.png", 800, 600, 100);
    fixture.write();
    let dataset = Dataset::from_json_file(&fixture.annotations_path()).unwrap();

    let engine = create_quiet_scan_engine();
    let result = engine
        .scan(&dataset, &fixture.root.path().join("no_such_dir"))
        .await;

    match result {
        Err(error @ ScanError::ImageDirectoryError { .. }) => assert!(error.is_fatal()),
        other => panic!("Expected image directory error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_zero_workers_is_configuration_error() {
    let fixture = DatasetFixture::new();
    fixture.write();
    let dataset = Dataset::from_json_file(&fixture.annotations_path()).unwrap();

    let engine = QualityScanEngine::new(
        StandardImageLoader::new(),
        DefaultScanConfig::default().with_worker_count(0),
        NoOpProgressReporter::new(),
    );

    let result = engine.scan(&dataset, &fixture.image_dir()).await;
    assert!(matches!(result, Err(ScanError::ConfigurationError { .. })));
}

#[tokio::test]
async fn test_empty_dataset_produces_empty_report() {
    let fixture = DatasetFixture::new();
    fixture.write();

    let engine = create_quiet_scan_engine();
    let outcome = scan_annotations_file(
        &fixture.annotations_path(),
        &fixture.image_dir(),
        &engine,
        CancellationFlag::new(),
    )
    .await
    .unwrap();

    assert!(outcome.is_complete());
    assert_eq!(outcome.summary.total_units, 0);
    assert!(outcome.into_report().unwrap().is_empty());
}
