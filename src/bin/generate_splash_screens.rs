//! # PWA 启动图生成工具
//!
//! 在纯色背景上居中绘制 logo，为 12 种设备尺寸生成启动图。
//! 单个尺寸失败不会中断批处理；只有全部成功时退出码才为 0。

use std::process::ExitCode;

use clap::Parser;
use pwa_assets::assets::{AssetConfig, SplashGenerator, SplashReport};
use pwa_assets::cli::{SplashCli, init_logging};
use pwa_assets::error::AppError;
use pwa_assets::layout::ProjectLayout;

fn run(cli: SplashCli) -> Result<SplashReport, AppError> {
    let layout = ProjectLayout::resolve(cli.paths.project_root)?
        .with_overrides(cli.paths.source, cli.paths.output_dir);

    let report = SplashGenerator::new(AssetConfig::default()).generate(
        &layout.source_image,
        &layout.icons_dir,
        &cli.background,
    )?;

    Ok(report)
}

fn main() -> ExitCode {
    init_logging();
    let cli = SplashCli::parse();

    match run(cli) {
        Ok(report) => {
            log::info!("🎉 已生成 {}/{} 张启动图", report.succeeded(), report.total);
            if report.is_complete() {
                ExitCode::SUCCESS
            } else {
                log::error!("❌ {} 张启动图生成失败", report.failures.len());
                ExitCode::FAILURE
            }
        }
        Err(err) => err.report(),
    }
}
