// Consumer - 並列ワーカー機能

use super::cancellation::CancellationFlag;
use crate::{
    core::{UnitOutcome, WorkUnit},
    image_loader::ImageLoaderBackend,
    quality::QualityEvaluator,
    services::processing::evaluate_unit,
};
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// ワーカー共通の実行設定
#[derive(Debug, Clone)]
pub struct ConsumerSettings {
    pub per_image_timeout: Option<Duration>,
    pub cancel: CancellationFlag,
}

/// 単一Consumerワーカー
///
/// 中断フラグは作業単位ごとに確認する。評価中の単位は最後まで処理される。
pub fn spawn_single_consumer<L>(
    worker_id: usize,
    evaluator: Arc<QualityEvaluator<L>>,
    work_rx: Arc<tokio::sync::Mutex<mpsc::Receiver<Vec<WorkUnit>>>>,
    result_tx: mpsc::Sender<UnitOutcome>,
    settings: ConsumerSettings,
) -> tokio::task::JoinHandle<Result<()>>
where
    L: ImageLoaderBackend + 'static,
{
    tokio::spawn(async move {
        'batches: loop {
            // 次のバッチを取得
            let batch = {
                let mut rx = work_rx.lock().await;
                match rx.recv().await {
                    Some(batch) => batch,
                    None => break, // チャンネル終了
                }
            };

            for unit in batch {
                if settings.cancel.is_cancelled() {
                    tracing::debug!(worker_id, "worker stopped by cancellation");
                    break 'batches;
                }

                let outcome = evaluate_unit(
                    Arc::clone(&evaluator),
                    unit,
                    settings.per_image_timeout,
                    worker_id,
                )
                .await;

                // 結果送信
                if (result_tx.send(outcome).await).is_err() {
                    // 結果チャンネルが閉じられた場合は終了
                    break 'batches;
                }
            }
        }
        Ok(())
    })
}

/// Consumers: 並列ワーカープール
pub fn spawn_consumers<L>(
    evaluator: Arc<QualityEvaluator<L>>,
    work_rx: mpsc::Receiver<Vec<WorkUnit>>,
    result_tx: mpsc::Sender<UnitOutcome>,
    settings: ConsumerSettings,
    worker_count: usize,
) -> Vec<tokio::task::JoinHandle<Result<()>>>
where
    L: ImageLoaderBackend + 'static,
{
    let work_rx = Arc::new(tokio::sync::Mutex::new(work_rx));
    let mut handles = Vec::with_capacity(worker_count);

    for worker_id in 0..worker_count {
        let handle = spawn_single_consumer(
            worker_id,
            Arc::clone(&evaluator),
            Arc::clone(&work_rx),
            result_tx.clone(),
            settings.clone(),
        );
        handles.push(handle);
    }

    handles
}
