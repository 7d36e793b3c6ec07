use crate::core::Dataset;
use crate::dataset::{ClassDistribution, DEFAULT_UNWANTED_CLASSES};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Configuration struct for inspect command
#[derive(Debug, Clone)]
pub struct InspectCommandConfig {
    pub annotations: PathBuf,
    pub unwanted: Option<Vec<String>>,
}

/// Execute inspect command
pub fn execute_inspect(config: InspectCommandConfig) -> Result<()> {
    let dataset = Dataset::from_json_file(&config.annotations)
        .context("アノテーションファイルを読み込めませんでした")?;

    let distribution = ClassDistribution::from_dataset(&dataset);
    let unwanted = unwanted_classes(config.unwanted.as_deref());

    println!(
        "📊 {} images, {} annotations, {} categories",
        dataset.images.len(),
        dataset.annotations.len(),
        dataset.categories.len()
    );
    println!("{}", format_inspection(&distribution, &unwanted));

    Ok(())
}

fn unwanted_classes(custom: Option<&[String]>) -> Vec<String> {
    match custom {
        Some(names) => names
            .iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect(),
        None => DEFAULT_UNWANTED_CLASSES.iter().map(|name| name.to_string()).collect(),
    }
}

/// クラス分布と除外対象クラスの警告を整形する
pub fn format_inspection(distribution: &ClassDistribution, unwanted: &[String]) -> String {
    let mut lines = vec!["=== Class Distribution ===".to_string()];
    for (name, count) in distribution.entries() {
        lines.push(format!("{name}: {count} instances"));
    }

    lines.push(String::new());
    lines.push("=== Unwanted Classes Present ===".to_string());
    let names: Vec<&str> = unwanted.iter().map(String::as_str).collect();
    for (name, count) in distribution.unwanted_present(&names) {
        lines.push(format!("[WARNING] {name}: {count} instances (FILTER THIS)"));
    }

    lines.join("\n")
}
