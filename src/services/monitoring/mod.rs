// 進捗監視機能
// 処理進捗の報告、エラー通知、完了通知

pub mod implementations;

#[cfg(test)]
pub mod test_mocks;

// 公開API
pub use implementations::{ConsoleProgressReporter, NoOpProgressReporter};

// テストモック（テスト時のみ）
#[cfg(test)]
pub use test_mocks::RecordingProgressReporter;
