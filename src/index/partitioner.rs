// Work Partitioner - 画像ごとに自己完結した作業単位を組み立てる

use super::annotation_index::AnnotationIndex;
use crate::core::{ImageRecord, WorkUnit};
use std::path::Path;
use std::sync::Arc;

/// 画像1枚につき1つの作業単位をデータセット順で生成
pub fn partition(images: &[ImageRecord], index: &AnnotationIndex, image_dir: &Path) -> Vec<WorkUnit> {
    let image_dir: Arc<Path> = Arc::from(image_dir);

    images
        .iter()
        .map(|image| {
            WorkUnit::new(
                image.clone(),
                Arc::clone(&image_dir),
                index.annotations_for(image.id).to_vec(),
            )
        })
        .collect()
}
