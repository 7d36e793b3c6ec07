// COCOデータセット品質スキャナー
// 低解像度・暗い画像・小さすぎる物体を並列に検出する

pub mod cli;
pub mod core;
pub mod dataset;
pub mod engine;
pub mod image_loader;
pub mod index;
pub mod quality;
pub mod services;

// 主要な型を再エクスポート
pub use crate::core::{AggregateReport, Dataset, ScanError, ScanOutcome, ScanResult, ScanStatus};
pub use crate::engine::{CancellationFlag, QualityScanEngine};
