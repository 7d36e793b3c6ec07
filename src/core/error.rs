// スキャン処理専用のカスタムエラー型定義

use thiserror::Error;

/// スキャン固有のエラー型
///
/// 画像単位の失敗はここには現れない（`UnitOutcome`として吸収される）。
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("データセット読み込みエラー: {path} - {source}")]
    DatasetLoadError {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("画像ディレクトリエラー: {path} - {reason}")]
    ImageDirectoryError { path: String, reason: String },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("チャンネルエラー: {message}")]
    ChannelError { message: String },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("スキャンが中断されました: {processed}/{total} 件処理済み")]
    Cancelled { processed: usize, total: usize },

    #[error("内部エラー: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl ScanError {
    /// データセット読み込みエラーの作成
    pub fn dataset_load(path: impl Into<String>, source: anyhow::Error) -> Self {
        Self::DatasetLoadError {
            path: path.into(),
            source,
        }
    }

    /// 画像ディレクトリエラーの作成
    pub fn image_directory(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ImageDirectoryError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// チャンネルエラーの作成
    pub fn channel(message: impl Into<String>) -> Self {
        Self::ChannelError {
            message: message.into(),
        }
    }

    /// 中断エラーの作成
    pub fn cancelled(processed: usize, total: usize) -> Self {
        Self::Cancelled { processed, total }
    }

    /// 内部エラーの作成
    pub fn internal(source: anyhow::Error) -> Self {
        Self::InternalError { source }
    }

    /// 開始前に検出される致命的エラーかどうか
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::DatasetLoadError { .. }
                | Self::ImageDirectoryError { .. }
                | Self::ConfigurationError { .. }
        )
    }
}

/// スキャンの結果型
pub type ScanResult<T> = std::result::Result<T, ScanError>;

impl From<anyhow::Error> for ScanError {
    fn from(error: anyhow::Error) -> Self {
        ScanError::InternalError { source: error }
    }
}

impl From<tokio::task::JoinError> for ScanError {
    fn from(error: tokio::task::JoinError) -> Self {
        ScanError::TaskError { source: error }
    }
}
