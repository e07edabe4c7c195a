//! # 启动图生成器
//!
//! ## 设计思路
//!
//! 每个设备尺寸独立处理：分配纯色画布 → 加载 logo → 缩放到短边的 30% →
//! 居中合成 → 写出 RGB PNG。
//!
//! 错误策略为"尽力而为"：
//! - logo 缺失或背景色无法解析：在处理任何尺寸之前直接失败；
//! - 单个尺寸失败：记录文件名与原因，继续处理剩余尺寸；
//! - 最终汇报 `成功数/总数`，全部成功才算整体成功。
//!
//! ## 实现思路
//!
//! logo 在每个尺寸内重新加载，内存中同一时刻只保留一张源图与一张输出图。

use std::path::{Path, PathBuf};

use super::color::BackgroundColor;
use super::encoder::{ensure_dir, write_rgb_png};
use super::pipeline::compose_splash;
use super::source::{SourceImage, ensure_source_exists};
use super::targets::{SPLASH_TARGETS, SplashTarget};
use super::{AssetConfig, AssetError};

/// 单个尺寸的失败记录。
#[derive(Debug)]
pub struct SplashFailure {
    pub file_name: &'static str,
    pub error: AssetError,
}

/// 启动图生成结果。
#[derive(Debug, Default)]
pub struct SplashReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<SplashFailure>,
    pub total: usize,
}

impl SplashReport {
    pub fn succeeded(&self) -> usize {
        self.written.len()
    }

    pub fn is_complete(&self) -> bool {
        self.succeeded() == self.total
    }
}

pub struct SplashGenerator {
    config: AssetConfig,
}

impl SplashGenerator {
    pub fn new(config: AssetConfig) -> Self {
        Self { config }
    }

    /// 为全部设备尺寸生成启动图。
    pub fn generate(
        &self,
        logo_path: &Path,
        output_dir: &Path,
        background: &str,
    ) -> Result<SplashReport, AssetError> {
        self.generate_targets(logo_path, output_dir, background, &SPLASH_TARGETS)
    }

    /// 为给定目标列表生成启动图。
    pub fn generate_targets(
        &self,
        logo_path: &Path,
        output_dir: &Path,
        background: &str,
        targets: &[SplashTarget],
    ) -> Result<SplashReport, AssetError> {
        ensure_source_exists(logo_path)?;
        let color: BackgroundColor = background.parse()?;

        log::info!("🎨 生成启动图，logo：{}", logo_path.display());
        log::info!("📁 输出目录：{}", output_dir.display());
        log::info!("🎨 背景色：{}", background);

        ensure_dir(output_dir)?;

        let mut report = SplashReport {
            total: targets.len(),
            ..SplashReport::default()
        };

        for target in targets {
            let path = output_dir.join(target.file_name);
            match self.render_target(logo_path, &path, target, color) {
                Ok(()) => {
                    log::info!(
                        "✅ 已创建：{}（{}x{}，{}）",
                        target.file_name,
                        target.width,
                        target.height,
                        target.device
                    );
                    report.written.push(path);
                }
                Err(error) => {
                    log::error!("❌ {} 生成失败：{}", target.file_name, error);
                    report.failures.push(SplashFailure {
                        file_name: target.file_name,
                        error,
                    });
                }
            }
        }

        Ok(report)
    }

    fn render_target(
        &self,
        logo_path: &Path,
        output_path: &Path,
        target: &SplashTarget,
        background: BackgroundColor,
    ) -> Result<(), AssetError> {
        let logo = SourceImage::load(logo_path)?;
        let canvas = compose_splash(
            &logo.pixels,
            target.width,
            target.height,
            background,
            self.config.logo_scale,
            self.config.resize_filter,
        )?;
        write_rgb_png(output_path, &canvas, &self.config)
    }
}
