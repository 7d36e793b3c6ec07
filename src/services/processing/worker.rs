// Worker - 単一画像の評価機能

use crate::core::{SkipReason, UnitOutcome, WorkUnit};
use crate::image_loader::ImageLoaderBackend;
use crate::quality::QualityEvaluator;
use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

/// 単一画像の評価
///
/// デコードと判定はブロッキングスレッドで実行する。
/// 評価中のパニックは`Failed`、タイムアウト超過は`Skipped`として返し、
/// 呼び出し側のワーカーは処理を継続できる。
/// タイムアウトしたブロッキング処理は中断できないため、結果を待たずに切り離す。
pub async fn evaluate_unit<L>(
    evaluator: Arc<QualityEvaluator<L>>,
    unit: WorkUnit,
    timeout: Option<Duration>,
    worker_id: usize,
) -> UnitOutcome
where
    L: ImageLoaderBackend + 'static,
{
    let file_name = unit.file_name().to_string();
    let handle = tokio::task::spawn_blocking(move || evaluator.evaluate(&unit));

    let joined = match timeout {
        Some(limit) => match tokio::time::timeout(limit, handle).await {
            Ok(joined) => joined,
            Err(_) => {
                tracing::debug!(worker_id, file = %file_name, "evaluation timed out");
                return UnitOutcome::Skipped {
                    file_name,
                    reason: SkipReason::TimedOut(limit),
                };
            }
        },
        None => handle.await,
    };

    match joined {
        Ok(outcome) => outcome,
        Err(join_error) => {
            let error = if join_error.is_panic() {
                format!("evaluation panicked: {}", panic_message(join_error.into_panic()))
            } else {
                format!("evaluation task aborted: {join_error}")
            };
            UnitOutcome::Failed { file_name, error }
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send + 'static>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
