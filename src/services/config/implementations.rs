// 設定管理の具象実装

use crate::core::ScanConfig;
use std::time::Duration;

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultScanConfig {
    worker_count: usize,
    buffer_size: usize,
    batch_size: usize,
    per_image_timeout: Option<Duration>,
    enable_progress: bool,
}

impl DefaultScanConfig {
    /// ワーカー数を指定して作成（値の検証はエンジン側で行う）
    pub fn new(worker_count: usize) -> Self {
        Self {
            worker_count,
            ..Self::default()
        }
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_per_image_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.per_image_timeout = timeout;
        self
    }

    pub fn with_progress_reporting(mut self, enable: bool) -> Self {
        self.enable_progress = enable;
        self
    }
}

impl Default for DefaultScanConfig {
    fn default() -> Self {
        Self {
            worker_count: num_cpus::get().max(1),
            buffer_size: 100,
            batch_size: 50,
            per_image_timeout: None,
            enable_progress: true,
        }
    }
}

impl ScanConfig for DefaultScanConfig {
    fn worker_count(&self) -> usize {
        self.worker_count
    }

    fn channel_buffer_size(&self) -> usize {
        self.buffer_size
    }

    fn batch_size(&self) -> usize {
        self.batch_size
    }

    fn per_image_timeout(&self) -> Option<Duration> {
        self.per_image_timeout
    }

    fn enable_progress_reporting(&self) -> bool {
        self.enable_progress
    }
}
