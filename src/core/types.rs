// データセットとスキャン単位に関連するデータ型定義

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// 画像ID
pub type ImageId = u64;

/// カテゴリID
pub type CategoryId = u64;

/// バウンディングボックス（絶対ピクセル座標, COCO形式 `[x, y, width, height]`）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// ボックス面積（ピクセル²）
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl From<[f64; 4]> for BBox {
    fn from([x, y, width, height]: [f64; 4]) -> Self {
        Self::new(x, y, width, height)
    }
}

impl From<BBox> for [f64; 4] {
    fn from(bbox: BBox) -> Self {
        [bbox.x, bbox.y, bbox.width, bbox.height]
    }
}

/// 画像メタデータ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: ImageId,
    /// 画像ディレクトリからの相対パス
    pub file_name: String,
    pub width: u32,
    pub height: u32,
}

/// アノテーション（1画像・1カテゴリに属するバウンディングボックス）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    pub id: u64,
    pub image_id: ImageId,
    pub category_id: CategoryId,
    pub bbox: BBox,
}

/// カテゴリ定義
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub name: String,
}

/// 読み込み済みデータセット
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub images: Vec<ImageRecord>,
    #[serde(default)]
    pub annotations: Vec<AnnotationRecord>,
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
}

/// 1画像分の評価入力
///
/// ワーカーが単独で所有し、評価後に破棄される。
#[derive(Debug, Clone)]
pub struct WorkUnit {
    pub image: ImageRecord,
    pub image_dir: Arc<Path>,
    pub annotations: Vec<AnnotationRecord>,
}

impl WorkUnit {
    pub fn new(image: ImageRecord, image_dir: Arc<Path>, annotations: Vec<AnnotationRecord>) -> Self {
        Self {
            image,
            image_dir,
            annotations,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.image.file_name
    }

    /// ディレクトリとファイル名から画像パスを解決
    pub fn image_path(&self) -> PathBuf {
        self.image_dir.join(&self.image.file_name)
    }
}

/// 位置を特定できる物体単位の検出結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectFinding {
    pub file_name: String,
    pub bbox: BBox,
    pub category_id: CategoryId,
}

impl ObjectFinding {
    /// 完了順に依存しない安定した並び順
    pub fn stable_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.file_name
            .cmp(&other.file_name)
            .then(self.category_id.cmp(&other.category_id))
            .then(self.bbox.x.total_cmp(&other.bbox.x))
            .then(self.bbox.y.total_cmp(&other.bbox.y))
            .then(self.bbox.width.total_cmp(&other.bbox.width))
            .then(self.bbox.height.total_cmp(&other.bbox.height))
    }
}

/// 1画像分の品質問題
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueSet {
    pub low_resolution: Vec<String>,
    pub poor_lighting: Vec<String>,
    pub too_small: Vec<ObjectFinding>,
    /// 未実装カテゴリ。常に空
    pub occluded: Vec<ObjectFinding>,
}

impl IssueSet {
    pub fn is_empty(&self) -> bool {
        self.low_resolution.is_empty()
            && self.poor_lighting.is_empty()
            && self.too_small.is_empty()
            && self.occluded.is_empty()
    }
}

/// 許容される読み込み失敗の理由
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    Missing,
    Undecodable(String),
    TimedOut(Duration),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "file not found"),
            Self::Undecodable(message) => write!(f, "could not decode image: {message}"),
            Self::TimedOut(limit) => write!(f, "timed out after {}ms", limit.as_millis()),
        }
    }
}

/// 個別評価の結果
#[derive(Debug, Clone, PartialEq)]
pub enum UnitOutcome {
    Evaluated {
        file_name: String,
        issues: IssueSet,
    },
    Skipped {
        file_name: String,
        reason: SkipReason,
    },
    Failed {
        file_name: String,
        error: String,
    },
}

impl UnitOutcome {
    pub fn file_name(&self) -> &str {
        match self {
            Self::Evaluated { file_name, .. }
            | Self::Skipped { file_name, .. }
            | Self::Failed { file_name, .. } => file_name,
        }
    }
}
