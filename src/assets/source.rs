//! # 源图片加载
//!
//! ## 设计思路
//!
//! 源图片只读不改：加载后统一转换为 RGBA，后续缩放与合成都基于同一种像素布局。
//! 文件是否存在在解码前单独检查，以便上层区分"源文件缺失"（整次运行失败）
//! 与其他解码错误。

use std::path::{Path, PathBuf};

use image::{GenericImageView, RgbaImage};

use super::AssetError;

/// 已解码的源图片（RGBA）。
pub struct SourceImage {
    /// 源文件路径（用于日志与诊断）。
    pub path: PathBuf,
    /// RGBA 像素数据。
    pub pixels: RgbaImage,
}

impl SourceImage {
    /// 从磁盘读取并解码源图片；不带透明通道的图片会被转换为 RGBA。
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        ensure_source_exists(path)?;

        let decoded = image::open(path)
            .map_err(|e| AssetError::Decode(format!("{}：{}", path.display(), e)))?;

        let (width, height) = decoded.dimensions();
        if width == 0 || height == 0 {
            return Err(AssetError::InvalidDimension(format!(
                "源图片尺寸为空：{}x{}",
                width, height
            )));
        }

        if !decoded.color().has_alpha() {
            log::debug!(
                "🎨 源图片无透明通道（{:?}），转换为 RGBA",
                decoded.color()
            );
        }

        Ok(Self {
            path: path.to_path_buf(),
            pixels: decoded.into_rgba8(),
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}

/// 检查源文件是否存在。
///
/// 生成器在任何输出之前调用，缺失时直接终止本次运行。
pub fn ensure_source_exists(path: &Path) -> Result<(), AssetError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(AssetError::SourceMissing(path.to_path_buf()))
    }
}
