use super::{ImageLoaderBackend, LoadError};
use image::{metadata::Orientation, DynamicImage, ImageDecoder, ImageReader};
use std::fmt::Display;
use std::path::Path;

/// 標準的な画像ローダー実装（`image`クレートによるデコード）
///
/// 形式は拡張子ではなくファイル内容から判定し、EXIFの向き情報を適用する。
#[derive(Clone, Debug, Default)]
pub struct StandardImageLoader;

impl StandardImageLoader {
    /// 新しい標準画像ローダーを作成
    pub fn new() -> Self {
        Self
    }
}

impl ImageLoaderBackend for StandardImageLoader {
    fn load(&self, path: &Path) -> Result<DynamicImage, LoadError> {
        if !path.is_file() {
            return Err(LoadError::NotFound(path.display().to_string()));
        }

        let decode_error = |e: &dyn Display| LoadError::Decode(format!("{}: {e}", path.display()));

        let reader = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| decode_error(&e))?;
        let mut decoder = reader.into_decoder().map_err(|e| decode_error(&e))?;
        let orientation = decoder.orientation().unwrap_or(Orientation::NoTransforms);

        let mut image = DynamicImage::from_decoder(decoder).map_err(|e| decode_error(&e))?;
        image.apply_orientation(orientation);
        Ok(image)
    }

    fn strategy_name(&self) -> &'static str {
        "Standard"
    }
}
