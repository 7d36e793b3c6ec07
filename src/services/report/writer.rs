// レポート出力 - JSON形式での書き出し

use crate::core::{AggregateReport, ReportCounts, ScanOutcome, ScanStatus, ScanSummary};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 出力ファイルの最上位構造
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDocument {
    pub generated_at: String,
    pub status: ScanStatus,
    pub counts: ReportCounts,
    pub summary: ScanSummary,
    pub report: AggregateReport,
}

impl ReportDocument {
    pub fn from_outcome(outcome: &ScanOutcome) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            status: outcome.status,
            counts: outcome.report.counts(),
            summary: outcome.summary.clone(),
            report: outcome.report.clone(),
        }
    }
}

/// スキャン結果をJSONファイルへ書き出す
///
/// 中断されたスキャンも`status: "cancelled"`として部分結果を出力する。
pub async fn write_report_json<P: AsRef<Path>>(path: P, outcome: &ScanOutcome) -> Result<()> {
    let path = path.as_ref();

    // 親ディレクトリが存在しない場合は作成
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| anyhow::anyhow!("ディレクトリ作成エラー: {e}"))?;
    }

    let document = ReportDocument::from_outcome(outcome);
    let json_str = serde_json::to_string_pretty(&document)
        .map_err(|e| anyhow::anyhow!("JSONシリアライズエラー: {e}"))?;

    tokio::fs::write(path, json_str)
        .await
        .map_err(|e| anyhow::anyhow!("ファイル書き込みエラー: {e}"))?;

    tracing::info!(path = %path.display(), status = ?outcome.status, "report written");
    Ok(())
}
