use image::DynamicImage;
use mockall::automock;
use std::path::Path;
use thiserror::Error;

pub mod standard;

/// 画像読み込み失敗の種類
///
/// どちらも評価時には「読み込み不可」として扱われ、スキャンは継続する。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("image file not found: {0}")]
    NotFound(String),

    #[error("failed to decode image: {0}")]
    Decode(String),
}

/// 画像読み込みバックエンドのトレイト
///
/// 評価はブロッキングスレッド上で行われるため同期API。
#[automock]
pub trait ImageLoaderBackend: Send + Sync {
    /// ファイルパスから画像を読み込む
    fn load(&self, path: &Path) -> Result<DynamicImage, LoadError>;

    /// 読み込み戦略の名前を取得
    fn strategy_name(&self) -> &'static str;
}
