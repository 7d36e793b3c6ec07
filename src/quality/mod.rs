// 品質評価層 - 1画像単位の判定ロジック

pub mod evaluator;
pub mod luminance;

pub use evaluator::{QualityEvaluator, QualityThresholds};
pub use luminance::mean_luminance;
