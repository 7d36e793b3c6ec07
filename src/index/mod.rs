// 索引層 - アノテーション索引の構築と作業単位への分割
// ワーカー起動前に必ず完了する準備段階

pub mod annotation_index;
pub mod partitioner;

pub use annotation_index::AnnotationIndex;
pub use partitioner::partition;
