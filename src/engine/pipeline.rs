// Pipeline - Producer-Consumer パイプライン
// 作業単位の配信、並列評価、結果集約のオーケストレーション

use super::{
    cancellation::CancellationFlag,
    consumer::{spawn_consumers, ConsumerSettings},
    producer::spawn_producer,
};
use crate::{
    core::{ProgressReporter, ScanConfig, ScanError, ScanOutcome, ScanResult, ScanStatus, WorkUnit},
    image_loader::ImageLoaderBackend,
    quality::QualityEvaluator,
    services::merge::spawn_result_collector,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// 責任が明確に分離されたパイプライン
pub struct ScanPipeline<L> {
    evaluator: Arc<QualityEvaluator<L>>,
}

impl<L> ScanPipeline<L>
where
    L: ImageLoaderBackend + 'static,
{
    /// 新しいパイプラインを作成
    pub fn new(evaluator: Arc<QualityEvaluator<L>>) -> Self {
        Self { evaluator }
    }

    /// 作業単位リストを処理
    ///
    /// 全単位の結果が揃う前に中断された場合は`ScanStatus::Cancelled`となり、
    /// それまでに集約された部分結果を返す。
    pub async fn execute<C, R>(
        &self,
        units: Vec<WorkUnit>,
        config: &C,
        reporter: Arc<R>,
        cancel: CancellationFlag,
    ) -> ScanResult<ScanOutcome>
    where
        C: ScanConfig + ?Sized,
        R: ProgressReporter + 'static,
    {
        let start_time = Instant::now();
        let total_units = units.len();

        // Producer-Consumerチャンネル構築
        let (work_tx, work_rx) = mpsc::channel::<Vec<WorkUnit>>(config.channel_buffer_size());
        let (result_tx, result_rx) = mpsc::channel(config.channel_buffer_size());

        reporter.report_started(total_units).await;

        // Producer起動
        let producer_handle = spawn_producer(units, config.batch_size(), work_tx, cancel.clone());

        // Consumer Pool起動
        let consumer_handles = spawn_consumers(
            Arc::clone(&self.evaluator),
            work_rx,
            result_tx.clone(),
            ConsumerSettings {
                per_image_timeout: config.per_image_timeout(),
                cancel: cancel.clone(),
            },
            config.worker_count(),
        );

        // Result Collector起動
        let collector_handle = spawn_result_collector(result_rx, total_units, Arc::clone(&reporter));

        // Producer完了を待機
        let dispatched = producer_handle.await??;

        // Consumer完了を待機
        for handle in consumer_handles {
            handle.await?.map_err(ScanError::internal)?;
        }

        // result_txを閉じてCollectorに完了を通知
        drop(result_tx);

        // Collector完了を待機
        let (report, mut summary) = collector_handle.await?;
        summary.elapsed_ms = start_time.elapsed().as_millis() as u64;

        let status = if summary.completed_units() < total_units {
            tracing::info!(
                dispatched,
                completed = summary.completed_units(),
                total = total_units,
                "scan cancelled"
            );
            ScanStatus::Cancelled
        } else {
            ScanStatus::Completed
        };

        // 完了報告
        reporter.report_completed(&summary).await;

        Ok(ScanOutcome {
            status,
            report,
            summary,
        })
    }
}
