// Quality Evaluator - 1画像分の品質チェック
// 解像度・明るさ・物体サイズを判定する純粋関数群

use super::luminance::mean_luminance;
use crate::core::{IssueSet, ObjectFinding, SkipReason, UnitOutcome, WorkUnit};
use crate::image_loader::{ImageLoaderBackend, LoadError};
use image::DynamicImage;

/// 品質判定のしきい値
///
/// 比較はすべて厳密な「未満」。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityThresholds {
    pub min_width: u32,
    pub min_height: u32,
    /// 平均輝度（0〜255）
    pub min_mean_brightness: f64,
    /// 画像面積に対するボックス面積の比
    pub min_object_area_ratio: f64,
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self {
            min_width: 640,
            min_height: 480,
            min_mean_brightness: 50.0,
            min_object_area_ratio: 0.02,
        }
    }
}

/// 画像ローダーとしきい値を保持する評価器
///
/// 状態を持たないため、`Arc`で全ワーカーから同時に呼び出せる。
#[derive(Debug, Clone)]
pub struct QualityEvaluator<L> {
    loader: L,
    thresholds: QualityThresholds,
}

impl<L> QualityEvaluator<L>
where
    L: ImageLoaderBackend,
{
    pub fn new(loader: L) -> Self {
        Self::with_thresholds(loader, QualityThresholds::default())
    }

    pub fn with_thresholds(loader: L, thresholds: QualityThresholds) -> Self {
        Self { loader, thresholds }
    }

    pub fn thresholds(&self) -> &QualityThresholds {
        &self.thresholds
    }

    /// 使用中の画像ローダー名
    pub fn loader_name(&self) -> &'static str {
        self.loader.strategy_name()
    }

    /// 作業単位を評価する
    ///
    /// ファイルが存在しない・デコードできない場合は`Skipped`を返す。
    pub fn evaluate(&self, unit: &WorkUnit) -> UnitOutcome {
        let file_name = unit.file_name().to_string();

        match self.loader.load(&unit.image_path()) {
            Ok(image) => UnitOutcome::Evaluated {
                issues: self.inspect(unit, &image),
                file_name,
            },
            Err(LoadError::NotFound(_)) => UnitOutcome::Skipped {
                file_name,
                reason: SkipReason::Missing,
            },
            Err(LoadError::Decode(message)) => UnitOutcome::Skipped {
                file_name,
                reason: SkipReason::Undecodable(message),
            },
        }
    }

    /// デコード済み画像に対する判定
    pub fn inspect(&self, unit: &WorkUnit, image: &DynamicImage) -> IssueSet {
        let file_name = unit.file_name();
        let (width, height) = (image.width(), image.height());
        let mut issues = IssueSet::default();

        if width < self.thresholds.min_width || height < self.thresholds.min_height {
            issues.low_resolution.push(file_name.to_string());
        }

        if mean_luminance(image) < self.thresholds.min_mean_brightness {
            issues.poor_lighting.push(file_name.to_string());
        }

        let image_area = width as f64 * height as f64;
        let min_area = image_area * self.thresholds.min_object_area_ratio;
        issues.too_small = unit
            .annotations
            .iter()
            .filter(|annotation| annotation.bbox.area() < min_area)
            .map(|annotation| ObjectFinding {
                file_name: file_name.to_string(),
                bbox: annotation.bbox,
                category_id: annotation.category_id,
            })
            .collect();

        // occluded: 判定ロジックなし
        issues
    }
}
