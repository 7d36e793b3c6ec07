// レポート出力機能

pub mod writer;

// 公開API
pub use writer::{write_report_json, ReportDocument};
