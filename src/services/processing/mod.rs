// 評価処理機能

pub mod worker;

// 公開API
pub use worker::evaluate_unit;
