//! # 编码与写盘
//!
//! PNG 使用可配置的压缩级别与行过滤（默认最高压缩），`favicon.ico` 通过 `ico` crate
//! 写出单帧 32 位图标。所有写入都会覆盖同名文件。

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage, RgbaImage};

use super::{AssetConfig, AssetError};

/// 确保目录存在（含父目录）。
pub fn ensure_dir(dir: &Path) -> Result<(), AssetError> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| {
            AssetError::FileSystem(format!("创建目录 '{}' 失败：{}", dir.display(), e))
        })?;
    }
    Ok(())
}

fn create_file(path: &Path) -> Result<BufWriter<File>, AssetError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| AssetError::FileSystem(format!("无法创建文件 '{}'：{}", path.display(), e)))
}

fn write_png_bytes(
    path: &Path,
    bytes: &[u8],
    width: u32,
    height: u32,
    color: ExtendedColorType,
    config: &AssetConfig,
) -> Result<(), AssetError> {
    let writer = create_file(path)?;
    let encoder = PngEncoder::new_with_quality(writer, config.png_compression, config.png_filter);
    encoder
        .write_image(bytes, width, height, color)
        .map_err(|e| AssetError::Encode(format!("PNG 编码失败 '{}'：{}", path.display(), e)))
}

/// 写出 RGBA PNG（图标、favicon）。
pub fn write_rgba_png(path: &Path, image: &RgbaImage, config: &AssetConfig) -> Result<(), AssetError> {
    let (width, height) = image.dimensions();
    write_png_bytes(path, image.as_raw(), width, height, ExtendedColorType::Rgba8, config)
}

/// 写出不透明 RGB PNG（启动图）。
pub fn write_rgb_png(path: &Path, image: &RgbImage, config: &AssetConfig) -> Result<(), AssetError> {
    let (width, height) = image.dimensions();
    write_png_bytes(path, image.as_raw(), width, height, ExtendedColorType::Rgb8, config)
}

/// 写出单帧 ICO。
pub fn write_ico(path: &Path, image: &RgbaImage) -> Result<(), AssetError> {
    let (width, height) = image.dimensions();
    if width > 256 || height > 256 {
        return Err(AssetError::InvalidDimension(format!(
            "ICO 帧最大 256x256，实际 {}x{}",
            width, height
        )));
    }

    let frame = ico::IconImage::from_rgba_data(width, height, image.as_raw().clone());
    let entry = ico::IconDirEntry::encode(&frame)
        .map_err(|e| AssetError::Encode(format!("ICO 帧编码失败：{}", e)))?;

    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);
    icon_dir.add_entry(entry);

    let writer = create_file(path)?;
    icon_dir
        .write(writer)
        .map_err(|e| AssetError::FileSystem(format!("写入 ICO '{}' 失败：{}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba};

    #[test]
    fn png_roundtrip_keeps_dimensions_and_alpha() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let path = dir.path().join("icon.png");
        let image = RgbaImage::from_pixel(24, 12, Rgba([1, 2, 3, 128]));

        write_rgba_png(&path, &image, &AssetConfig::default()).expect("write failed");

        let decoded = image::open(&path).expect("decode failed");
        assert_eq!(decoded.dimensions(), (24, 12));
        assert!(decoded.color().has_alpha());
    }

    #[test]
    fn ico_decodes_with_image_crate() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let path = dir.path().join("favicon.ico");
        let image = RgbaImage::from_pixel(32, 32, Rgba([200, 100, 50, 255]));

        write_ico(&path, &image).expect("write failed");

        let decoded = image::open(&path).expect("decode failed");
        assert_eq!(decoded.dimensions(), (32, 32));
    }

    #[test]
    fn ico_rejects_oversized_frame() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let image = RgbaImage::new(300, 300);
        let result = write_ico(&dir.path().join("big.ico"), &image);
        assert!(matches!(result, Err(AssetError::InvalidDimension(_))));
    }

    #[test]
    fn ensure_dir_creates_nested_parents() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let nested = dir.path().join("public").join("icons");

        ensure_dir(&nested).expect("ensure_dir failed");
        assert!(nested.is_dir());
    }
}
