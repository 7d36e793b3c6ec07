// サービス層 - 機能別のビジネスロジック
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod config;
pub mod merge;
pub mod monitoring;
pub mod processing;
pub mod report;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::DefaultScanConfig;
pub use merge::{spawn_result_collector, OutcomeAccumulator};
pub use monitoring::{ConsoleProgressReporter, NoOpProgressReporter};
pub use processing::evaluate_unit;
pub use report::{write_report_json, ReportDocument};
