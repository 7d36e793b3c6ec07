// Producer - 作業単位の配信機能

use super::cancellation::CancellationFlag;
use crate::core::{ScanError, ScanResult, WorkUnit};
use tokio::sync::mpsc;

/// Producer: 作業単位をバッチにまとめて配信
///
/// 各バッチの送信前に中断フラグを確認し、立っていれば残りを配信しない。
/// 戻り値は配信した作業単位の数。中断以外でワーカー側が受信を止めた場合は
/// `ScanError::ChannelError`を返す。
pub fn spawn_producer(
    units: Vec<WorkUnit>,
    batch_size: usize,
    work_tx: mpsc::Sender<Vec<WorkUnit>>,
    cancel: CancellationFlag,
) -> tokio::task::JoinHandle<ScanResult<usize>> {
    tokio::spawn(async move {
        let batch_size = batch_size.max(1);
        let mut dispatched = 0;
        let mut remaining = units.into_iter().peekable();

        while remaining.peek().is_some() {
            if cancel.is_cancelled() {
                tracing::info!(dispatched, "producer stopped by cancellation");
                break;
            }

            let batch: Vec<WorkUnit> = remaining.by_ref().take(batch_size).collect();
            let batch_len = batch.len();

            if (work_tx.send(batch).await).is_err() {
                if cancel.is_cancelled() {
                    // 中断で全ワーカーが終了済み
                    break;
                }
                return Err(ScanError::channel(format!(
                    "作業チャンネルが閉じられました（{dispatched}件配信済み）"
                )));
            }
            dispatched += batch_len;
        }
        // work_txをドロップしてチャンネル終了シグナル
        Ok(dispatched)
    })
}
