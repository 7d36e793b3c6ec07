// Collector - 評価結果の収集と集約

use crate::core::{AggregateReport, ProgressReporter, ScanSummary, SkipReason, UnitFailure, UnitOutcome};
use std::sync::Arc;
use tokio::sync::mpsc;

/// 集約途中の状態
///
/// 受信した順にマージされるため、並び順は`AggregateReport::finalize`で確定させる。
#[derive(Debug, Default)]
pub struct OutcomeAccumulator {
    report: AggregateReport,
    summary: ScanSummary,
}

impl OutcomeAccumulator {
    pub fn new(total_units: usize) -> Self {
        Self {
            report: AggregateReport::new(),
            summary: ScanSummary {
                total_units,
                ..ScanSummary::default()
            },
        }
    }

    /// 1件分の結果を取り込む
    pub fn absorb(&mut self, outcome: UnitOutcome) {
        match outcome {
            UnitOutcome::Evaluated { issues, .. } => {
                self.report.merge(issues);
                self.summary.evaluated_units += 1;
            }
            UnitOutcome::Skipped { file_name, reason } => {
                tracing::debug!(file = %file_name, %reason, "image skipped");
                match reason {
                    SkipReason::Missing => self.summary.skipped_missing += 1,
                    SkipReason::Undecodable(_) => self.summary.skipped_undecodable += 1,
                    SkipReason::TimedOut(_) => self.summary.skipped_timed_out += 1,
                }
                self.summary.skipped_units += 1;
            }
            UnitOutcome::Failed { file_name, error } => {
                tracing::warn!(file = %file_name, %error, "image evaluation failed");
                self.summary.failures.push(UnitFailure { file_name, error });
                self.summary.failed_units += 1;
            }
        }
    }

    pub fn completed(&self) -> usize {
        self.summary.completed_units()
    }

    pub fn finish(self) -> (AggregateReport, ScanSummary) {
        let mut summary = self.summary;
        summary
            .failures
            .sort_by(|a, b| a.file_name.cmp(&b.file_name));
        (self.report.finalize(), summary)
    }
}

/// Collector: 結果チャネルを読み切り、レポートと統計を返す
pub fn spawn_result_collector<R>(
    mut result_rx: mpsc::Receiver<UnitOutcome>,
    total_units: usize,
    reporter: Arc<R>,
) -> tokio::task::JoinHandle<(AggregateReport, ScanSummary)>
where
    R: ProgressReporter + 'static,
{
    tokio::spawn(async move {
        let mut accumulator = OutcomeAccumulator::new(total_units);

        while let Some(outcome) = result_rx.recv().await {
            let file_name = outcome.file_name().to_string();

            if let UnitOutcome::Failed { error, .. } = &outcome {
                reporter.report_failure(&file_name, error).await;
            }
            accumulator.absorb(outcome);

            // 進捗報告
            reporter
                .report_progress(accumulator.completed(), total_units, &file_name)
                .await;
        }

        accumulator.finish()
    })
}
