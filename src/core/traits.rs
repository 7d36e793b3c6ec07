// スキャンシステムのトレイト定義
// エンジンが依存する抽象化インターフェース

use super::report::ScanSummary;
use async_trait::async_trait;
use mockall::automock;
use std::time::Duration;

/// スキャン設定を抽象化するトレイト
#[automock]
pub trait ScanConfig: Send + Sync {
    /// 並列ワーカー数を取得
    fn worker_count(&self) -> usize;

    /// チャンネルバッファサイズを取得
    fn channel_buffer_size(&self) -> usize;

    /// 1回の配信でまとめる作業単位数を取得
    fn batch_size(&self) -> usize;

    /// 画像1枚あたりのタイムアウト（Noneで無制限）
    fn per_image_timeout(&self) -> Option<Duration>;

    /// 進捗報告を有効にするかどうか
    fn enable_progress_reporting(&self) -> bool;
}

/// 進捗報告の抽象化トレイト
///
/// 実装の有無や表示方法はレポート内容に影響しない。
#[automock]
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// スキャン開始時の報告
    async fn report_started(&self, total_units: usize);

    /// 1画像完了ごとの報告（スキップ・失敗も含む）
    async fn report_progress(&self, completed: usize, total: usize, file_name: &str);

    /// 画像単位の想定外エラーの報告
    async fn report_failure(&self, file_name: &str, error: &str);

    /// スキャン終了時の報告
    async fn report_completed(&self, summary: &ScanSummary);
}
