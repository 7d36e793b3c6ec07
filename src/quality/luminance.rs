// 輝度計算
// BT.601の固定小数点係数（14bit）でグレースケール化し、全画素の算術平均を取る

use image::DynamicImage;

const R_WEIGHT: u32 = 4899;
const G_WEIGHT: u32 = 9617;
const B_WEIGHT: u32 = 1868;
const SHIFT: u32 = 14;
const ROUND: u32 = 1 << (SHIFT - 1);

/// 1画素のRGBを0〜255の輝度へ変換
pub fn luma_bt601(r: u8, g: u8, b: u8) -> u8 {
    let y = (R_WEIGHT * r as u32 + G_WEIGHT * g as u32 + B_WEIGHT * b as u32 + ROUND) >> SHIFT;
    y.min(255) as u8
}

/// 画像全体の平均輝度（アルファは無視）
pub fn mean_luminance(image: &DynamicImage) -> f64 {
    let rgb = image.to_rgb8();
    let pixel_count = rgb.width() as u64 * rgb.height() as u64;
    if pixel_count == 0 {
        return 0.0;
    }

    let sum: u64 = rgb
        .pixels()
        .map(|p| luma_bt601(p[0], p[1], p[2]) as u64)
        .sum();

    sum as f64 / pixel_count as f64
}
