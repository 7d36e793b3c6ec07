// Annotation Index - 画像IDからアノテーション列への対応表

use crate::core::{AnnotationRecord, ImageId, ImageRecord};
use std::collections::HashMap;

/// 画像ID → アノテーション列の索引
///
/// 一度だけ構築され、以降は読み取り専用で共有される。
/// 登録済みの画像はアノテーションがなくても空列を持つ。
#[derive(Debug, Clone, Default)]
pub struct AnnotationIndex {
    by_image: HashMap<ImageId, Vec<AnnotationRecord>>,
    annotation_count: usize,
}

impl AnnotationIndex {
    /// 画像一覧とアノテーション一覧から索引を構築（アノテーションは1パス）
    pub fn build(images: &[ImageRecord], annotations: &[AnnotationRecord]) -> Self {
        let mut by_image: HashMap<ImageId, Vec<AnnotationRecord>> =
            HashMap::with_capacity(images.len());

        for image in images {
            by_image.entry(image.id).or_default();
        }

        for annotation in annotations {
            by_image
                .entry(annotation.image_id)
                .or_default()
                .push(annotation.clone());
        }

        Self {
            by_image,
            annotation_count: annotations.len(),
        }
    }

    /// 指定画像のアノテーション列（未登録の画像は空）
    pub fn annotations_for(&self, image_id: ImageId) -> &[AnnotationRecord] {
        self.by_image
            .get(&image_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, image_id: ImageId) -> bool {
        self.by_image.contains_key(&image_id)
    }

    /// 索引に含まれる画像数
    pub fn image_count(&self) -> usize {
        self.by_image.len()
    }

    pub fn annotation_count(&self) -> usize {
        self.annotation_count
    }
}
