// クラス分布の集計

use crate::core::{CategoryId, Dataset};
use std::collections::BTreeMap;

/// 監視用途で除外したい動物クラス
pub const DEFAULT_UNWANTED_CLASSES: &[&str] = &[
    "dog", "cat", "bird", "horse", "sheep", "cow", "elephant", "bear", "zebra", "giraffe",
];

/// カテゴリごとのインスタンス数
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDistribution {
    counts: BTreeMap<CategoryId, usize>,
    names: BTreeMap<CategoryId, String>,
}

impl ClassDistribution {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut counts = BTreeMap::new();
        for annotation in &dataset.annotations {
            *counts.entry(annotation.category_id).or_insert(0) += 1;
        }

        let names = dataset
            .categories
            .iter()
            .map(|category| (category.id, category.name.clone()))
            .collect();

        Self { counts, names }
    }

    pub fn count(&self, category_id: CategoryId) -> usize {
        self.counts.get(&category_id).copied().unwrap_or(0)
    }

    /// (カテゴリ名, 件数) をカテゴリID順で返す
    ///
    /// カテゴリ定義のないIDは `category <id>` と表示する。
    pub fn entries(&self) -> Vec<(String, usize)> {
        self.counts
            .iter()
            .map(|(id, count)| (self.display_name(*id), *count))
            .collect()
    }

    /// 除外対象リストに含まれるカテゴリと件数（インスタンスがなくても0件で返す）
    pub fn unwanted_present(&self, unwanted: &[&str]) -> Vec<(String, usize)> {
        self.names
            .iter()
            .filter(|(_, name)| {
                let lowered = name.to_lowercase();
                unwanted.iter().any(|candidate| candidate.to_lowercase() == lowered)
            })
            .map(|(id, name)| (name.clone(), self.count(*id)))
            .collect()
    }

    pub fn total_instances(&self) -> usize {
        self.counts.values().sum()
    }

    fn display_name(&self, category_id: CategoryId) -> String {
        self.names
            .get(&category_id)
            .cloned()
            .unwrap_or_else(|| format!("category {category_id}"))
    }
}
