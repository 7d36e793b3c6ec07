// テスト用データセットの生成ヘルパー

use image::{GrayImage, Luma, RgbImage};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 一時ディレクトリ上のCOCOデータセット
pub struct DatasetFixture {
    pub root: TempDir,
    images: Vec<Value>,
    annotations: Vec<Value>,
    next_annotation_id: u64,
}

impl DatasetFixture {
    pub fn new() -> Self {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("images")).unwrap();
        Self {
            root,
            images: Vec::new(),
            annotations: Vec::new(),
            next_annotation_id: 1,
        }
    }

    pub fn image_dir(&self) -> PathBuf {
        self.root.path().join("images")
    }

    pub fn annotations_path(&self) -> PathBuf {
        self.root.path().join("instances.json")
    }

    /// 一様な明るさのグレースケール画像を追加
    pub fn add_gray_image(&mut self, file_name: &str, width: u32, height: u32, level: u8) -> u64 {
        GrayImage::from_pixel(width, height, Luma([level]))
            .save(self.image_dir().join(file_name))
            .unwrap();
        self.register_image(file_name, width, height)
    }

    /// RGB画像を追加
    pub fn add_rgb_image(&mut self, file_name: &str, width: u32, height: u32, rgb: [u8; 3]) -> u64 {
        RgbImage::from_pixel(width, height, image::Rgb(rgb))
            .save(self.image_dir().join(file_name))
            .unwrap();
        self.register_image(file_name, width, height)
    }

    /// デコードできないファイルを追加
    pub fn add_corrupted_image(&mut self, file_name: &str) -> u64 {
        fs::write(self.image_dir().join(file_name), b"NOT_AN_IMAGE").unwrap();
        self.register_image(file_name, 640, 480)
    }

    /// ファイルを作らずにアノテーションだけ登録
    pub fn add_missing_image(&mut self, file_name: &str) -> u64 {
        self.register_image(file_name, 640, 480)
    }

    pub fn add_box(&mut self, image_id: u64, category_id: u64, bbox: [f64; 4]) {
        self.annotations.push(json!({
            "id": self.next_annotation_id,
            "image_id": image_id,
            "category_id": category_id,
            "bbox": bbox,
            "area": bbox[2] * bbox[3],
            "iscrowd": 0
        }));
        self.next_annotation_id += 1;
    }

    /// アノテーションファイルを書き出してパスを返す
    pub fn write(&self) -> PathBuf {
        let document = json!({
            "info": {"description": "fixture"},
            "images": self.images,
            "annotations": self.annotations,
            "categories": [
                {"id": 1, "name": "person", "supercategory": "person"},
                {"id": 3, "name": "car", "supercategory": "vehicle"},
                {"id": 18, "name": "dog", "supercategory": "animal"}
            ]
        });
        let path = self.annotations_path();
        fs::write(&path, serde_json::to_string_pretty(&document).unwrap()).unwrap();
        path
    }

    fn register_image(&mut self, file_name: &str, width: u32, height: u32) -> u64 {
        let id = self.images.len() as u64 + 1;
        self.images.push(json!({
            "id": id,
            "file_name": file_name,
            "width": width,
            "height": height
        }));
        id
    }
}

pub fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}
