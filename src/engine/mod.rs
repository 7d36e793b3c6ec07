// エンジン層 - 並列処理とオーケストレーション
// サービス層を組み合わせて高レベルな処理を提供

pub mod api;
pub mod cancellation;
pub mod consumer;
mod pipeline;
pub mod producer;
pub mod scan_engine;

// 公開API - 主要エンジンクラス
pub use api::{create_default_scan_engine, create_quiet_scan_engine, scan_annotations_file};
pub use cancellation::CancellationFlag;
pub use scan_engine::QualityScanEngine;
