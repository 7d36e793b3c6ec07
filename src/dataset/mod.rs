// データセット層 - COCOファイルの読み込みとクラス分布の集計

pub mod coco;
pub mod statistics;

pub use statistics::{ClassDistribution, DEFAULT_UNWANTED_CLASSES};
