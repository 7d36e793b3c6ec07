// COCOアノテーションファイルの読み込み

use crate::core::{Dataset, ScanError, ScanResult};
use anyhow::Context;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

impl Dataset {
    /// COCO形式のJSONファイルからデータセットを読み込む
    ///
    /// `images` / `annotations` / `categories` 以外のキーは無視する。
    pub fn from_json_file(path: &Path) -> ScanResult<Self> {
        let load = || -> anyhow::Result<Self> {
            let file = File::open(path)
                .with_context(|| format!("Failed to open annotation file: {}", path.display()))?;
            let dataset = serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("Failed to parse COCO JSON: {}", path.display()))?;
            Ok(dataset)
        };

        let dataset = load().map_err(|e| ScanError::dataset_load(path.display().to_string(), e))?;
        tracing::info!(
            images = dataset.images.len(),
            annotations = dataset.annotations.len(),
            categories = dataset.categories.len(),
            "COCO dataset loaded"
        );
        Ok(dataset)
    }

    /// カテゴリIDから名前を引く
    pub fn category_name(&self, category_id: u64) -> Option<&str> {
        self.categories
            .iter()
            .find(|category| category.id == category_id)
            .map(|category| category.name.as_str())
    }
}
