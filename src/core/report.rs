// 集約レポートとスキャン結果の型定義

use super::error::{ScanError, ScanResult};
use super::types::{IssueSet, ObjectFinding};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 全画像の品質問題を集約したレポート
///
/// `merge`は各セクションの連結のみを行うため、結合順に依存しない。
/// `finalize`後は各セクションが安定ソートされ、完了順に関わらず同一の内容になる。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    pub low_resolution: Vec<String>,
    pub poor_lighting: Vec<String>,
    pub too_small: Vec<ObjectFinding>,
    pub occluded: Vec<ObjectFinding>,
}

impl AggregateReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1画像分の問題セットを取り込む
    pub fn merge(&mut self, issues: IssueSet) {
        self.low_resolution.extend(issues.low_resolution);
        self.poor_lighting.extend(issues.poor_lighting);
        self.too_small.extend(issues.too_small);
        self.occluded.extend(issues.occluded);
    }

    /// 部分レポート同士を結合
    pub fn combine(mut self, other: AggregateReport) -> Self {
        self.low_resolution.extend(other.low_resolution);
        self.poor_lighting.extend(other.poor_lighting);
        self.too_small.extend(other.too_small);
        self.occluded.extend(other.occluded);
        self
    }

    /// 全セクションを安定した順序に並べ替える
    pub fn finalize(mut self) -> Self {
        self.low_resolution.sort();
        self.poor_lighting.sort();
        self.too_small.sort_by(ObjectFinding::stable_cmp);
        self.occluded.sort_by(ObjectFinding::stable_cmp);
        self
    }

    pub fn counts(&self) -> ReportCounts {
        ReportCounts {
            low_resolution: self.low_resolution.len(),
            poor_lighting: self.poor_lighting.len(),
            too_small: self.too_small.len(),
            occluded: self.occluded.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts().total() == 0
    }
}

/// セクションごとの件数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportCounts {
    pub low_resolution: usize,
    pub poor_lighting: usize,
    pub too_small: usize,
    pub occluded: usize,
}

impl ReportCounts {
    pub fn total(&self) -> usize {
        self.low_resolution + self.poor_lighting + self.too_small + self.occluded
    }
}

impl fmt::Display for ReportCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "═══ Data Quality Report ═══")?;
        writeln!(f, "Low resolution images: {}", self.low_resolution)?;
        writeln!(f, "Poor lighting images: {}", self.poor_lighting)?;
        writeln!(f, "Too small objects: {}", self.too_small)?;
        write!(f, "Occluded objects: {}", self.occluded)
    }
}

/// スキャンの終了状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanStatus {
    Completed,
    Cancelled,
}

/// 画像単位の想定外エラー
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitFailure {
    pub file_name: String,
    pub error: String,
}

/// スキャン全体の統計
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub total_units: usize,
    pub evaluated_units: usize,
    pub skipped_units: usize,
    pub failed_units: usize,
    pub skipped_missing: usize,
    pub skipped_undecodable: usize,
    pub skipped_timed_out: usize,
    pub failures: Vec<UnitFailure>,
    pub elapsed_ms: u64,
}

impl ScanSummary {
    /// 結果を受け取った画像数（スキップ・失敗を含む）
    pub fn completed_units(&self) -> usize {
        self.evaluated_units + self.skipped_units + self.failed_units
    }
}

/// スキャン結果
///
/// 中断されたスキャンは`status == Cancelled`となり、`into_report`は失敗する。
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome {
    pub status: ScanStatus,
    pub report: AggregateReport,
    pub summary: ScanSummary,
}

impl ScanOutcome {
    pub fn is_complete(&self) -> bool {
        self.status == ScanStatus::Completed
    }

    /// 完了したスキャンの最終レポートを取り出す
    pub fn into_report(self) -> ScanResult<AggregateReport> {
        match self.status {
            ScanStatus::Completed => Ok(self.report),
            ScanStatus::Cancelled => Err(ScanError::cancelled(
                self.summary.completed_units(),
                self.summary.total_units,
            )),
        }
    }

    /// 中断時も含めて、これまでに集約された結果を参照する
    pub fn partial_report(&self) -> &AggregateReport {
        &self.report
    }
}
