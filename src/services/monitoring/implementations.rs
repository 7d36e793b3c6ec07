// 進捗監視の具象実装

use crate::core::{ProgressReporter, ScanSummary};
use async_trait::async_trait;

/// コンソール出力による進捗報告実装
#[derive(Debug, Clone)]
pub struct ConsoleProgressReporter {
    quiet: bool,
    interval: usize,
}

impl Default for ConsoleProgressReporter {
    fn default() -> Self {
        Self {
            quiet: false,
            interval: 1000,
        }
    }
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::default()
        }
    }

    /// 進捗を表示する間隔（画像数）
    pub fn with_interval(mut self, interval: usize) -> Self {
        self.interval = interval.max(1);
        self
    }

    fn should_print(&self, completed: usize, total: usize) -> bool {
        !self.quiet && (completed % self.interval == 0 || completed == total)
    }
}

#[async_trait]
impl ProgressReporter for ConsoleProgressReporter {
    async fn report_started(&self, total_units: usize) {
        if !self.quiet {
            println!("🚀 Processing {total_units} images...");
        }
    }

    async fn report_progress(&self, completed: usize, total: usize, file_name: &str) {
        if self.should_print(completed, total) {
            let percentage = if total > 0 {
                (completed as f64 / total as f64) * 100.0
            } else {
                100.0
            };
            println!("📊 Progress: {completed}/{total} ({percentage:.1}%) - {file_name}");
        }
    }

    async fn report_failure(&self, file_name: &str, error: &str) {
        if !self.quiet {
            eprintln!("❌ Error processing {file_name}: {error}");
        }
    }

    async fn report_completed(&self, summary: &ScanSummary) {
        if !self.quiet {
            println!(
                "✅ Completed {}/{} images (skipped: {}, failed: {}) in {}ms",
                summary.completed_units(),
                summary.total_units,
                summary.skipped_units,
                summary.failed_units,
                summary.elapsed_ms
            );
        }
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_started(&self, _total_units: usize) {
        // 何もしない
    }

    async fn report_progress(&self, _completed: usize, _total: usize, _file_name: &str) {
        // 何もしない
    }

    async fn report_failure(&self, _file_name: &str, _error: &str) {
        // 何もしない
    }

    async fn report_completed(&self, _summary: &ScanSummary) {
        // 何もしない
    }
}
