// コアレイヤー - 基盤となるトレイト、型、エラー定義
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod error;
pub mod report;
pub mod traits;
pub mod types;

// 公開API - 明示的にエクスポートして曖昧性を回避
pub use error::{ScanError, ScanResult};
pub use report::{AggregateReport, ReportCounts, ScanOutcome, ScanStatus, ScanSummary, UnitFailure};
pub use traits::{ProgressReporter, ScanConfig};
pub use types::{
    AnnotationRecord, BBox, CategoryId, CategoryRecord, Dataset, ImageId, ImageRecord, IssueSet,
    ObjectFinding, SkipReason, UnitOutcome, WorkUnit,
};
