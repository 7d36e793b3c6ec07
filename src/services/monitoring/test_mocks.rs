// テスト用の進捗報告モック実装
// 呼び出し内容を記録し、任意で最初の進捗時に中断フラグを立てる

use crate::core::{ProgressReporter, ScanSummary};
use crate::engine::CancellationFlag;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct RecordingProgressReporter {
    pub started: Arc<Mutex<Option<usize>>>,
    pub progress_calls: Arc<Mutex<Vec<(usize, usize, String)>>>,
    pub failure_calls: Arc<Mutex<Vec<(String, String)>>>,
    pub completed: Arc<Mutex<Option<ScanSummary>>>,
    cancel_on_progress: Option<CancellationFlag>,
}

impl RecordingProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancelling(flag: CancellationFlag) -> Self {
        Self {
            cancel_on_progress: Some(flag),
            ..Self::default()
        }
    }

    pub fn completed_counts(&self) -> Vec<usize> {
        self.progress_calls
            .lock()
            .unwrap()
            .iter()
            .map(|(completed, _, _)| *completed)
            .collect()
    }
}

#[async_trait::async_trait]
impl ProgressReporter for RecordingProgressReporter {
    async fn report_started(&self, total_units: usize) {
        *self.started.lock().unwrap() = Some(total_units);
    }

    async fn report_progress(&self, completed: usize, total: usize, file_name: &str) {
        self.progress_calls
            .lock()
            .unwrap()
            .push((completed, total, file_name.to_string()));
        if let Some(flag) = &self.cancel_on_progress {
            flag.cancel();
        }
    }

    async fn report_failure(&self, file_name: &str, error: &str) {
        self.failure_calls
            .lock()
            .unwrap()
            .push((file_name.to_string(), error.to_string()));
    }

    async fn report_completed(&self, summary: &ScanSummary) {
        *self.completed.lock().unwrap() = Some(summary.clone());
    }
}
