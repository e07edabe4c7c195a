//! # 图标生成器
//!
//! ## 设计思路
//!
//! 一次加载源图片，按固定列表依次缩放并写出：
//! 8 个 PWA 图标、3 个 favicon PNG，以及图标目录上一级的 `favicon.ico`。
//!
//! 错误策略为"遇错即停"：源文件缺失在写任何文件之前报错；
//! 其他错误直接向上传播，已经写出的文件保留在磁盘上，不做回滚。

use std::path::{Path, PathBuf};

use super::encoder::{ensure_dir, write_ico, write_rgba_png};
use super::pipeline::resize_exact;
use super::source::SourceImage;
use super::targets::{FAVICON_ICO_NAME, FAVICON_ICO_SIZE, icon_targets};
use super::{AssetConfig, AssetError};

/// 图标生成结果。
#[derive(Debug, Default)]
pub struct IconReport {
    /// 按写出顺序排列的文件路径（最后一个为 `favicon.ico`）。
    pub written: Vec<PathBuf>,
}

impl IconReport {
    pub fn count(&self) -> usize {
        self.written.len()
    }
}

/// `favicon.ico` 的输出路径：图标目录的上一级；没有上一级时退回图标目录本身。
pub fn favicon_ico_path(output_dir: &Path) -> PathBuf {
    output_dir
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(output_dir)
        .join(FAVICON_ICO_NAME)
}

pub struct IconGenerator {
    config: AssetConfig,
}

impl IconGenerator {
    pub fn new(config: AssetConfig) -> Self {
        Self { config }
    }

    /// 生成全部图标。
    pub fn generate(&self, source_path: &Path, output_dir: &Path) -> Result<IconReport, AssetError> {
        let source = SourceImage::load(source_path)?;
        let (width, height) = source.dimensions();

        log::info!("📱 生成 PWA 图标，源图片：{}（{}x{}）", source.path.display(), width, height);
        log::info!("📁 输出目录：{}", output_dir.display());

        ensure_dir(output_dir)?;

        let mut report = IconReport::default();

        for target in icon_targets() {
            let resized = resize_exact(
                &source.pixels,
                target.size,
                target.size,
                self.config.resize_filter,
            )?;

            let file_name = target.file_name();
            let path = output_dir.join(&file_name);
            write_rgba_png(&path, &resized, &self.config)?;

            log::info!("✅ 已创建：{}（{}x{}）", file_name, target.size, target.size);
            report.written.push(path);
        }

        let ico_path = favicon_ico_path(output_dir);
        let favicon = resize_exact(
            &source.pixels,
            FAVICON_ICO_SIZE,
            FAVICON_ICO_SIZE,
            self.config.resize_filter,
        )?;
        write_ico(&ico_path, &favicon)?;
        log::info!("✅ 已创建：{}（{}x{}）", FAVICON_ICO_NAME, FAVICON_ICO_SIZE, FAVICON_ICO_SIZE);
        report.written.push(ico_path);

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favicon_ico_goes_one_level_up() {
        let path = favicon_ico_path(Path::new("/project/public/icons"));
        assert_eq!(path, PathBuf::from("/project/public/favicon.ico"));
    }

    #[test]
    fn favicon_ico_without_parent_stays_in_output_dir() {
        let path = favicon_ico_path(Path::new("icons"));
        assert_eq!(path, PathBuf::from("icons/favicon.ico"));
    }

    #[test]
    fn missing_source_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let output_dir = dir.path().join("icons");
        let generator = IconGenerator::new(AssetConfig::fast());

        let result = generator.generate(&dir.path().join("missing.png"), &output_dir);

        assert!(matches!(result, Err(AssetError::SourceMissing(_))));
        assert!(!output_dir.exists());
    }
}
