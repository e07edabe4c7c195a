//! # PWA 图标生成工具
//!
//! 从 `public/busly-logo-only.png` 生成全部 PWA 图标、favicon PNG 与 `favicon.ico`。
//! 任意一步失败都会终止运行并返回退出码 1。

use std::process::ExitCode;

use clap::Parser;
use pwa_assets::assets::{AssetConfig, IconGenerator};
use pwa_assets::cli::{IconsCli, init_logging};
use pwa_assets::error::AppError;
use pwa_assets::layout::ProjectLayout;

fn run(cli: IconsCli) -> Result<usize, AppError> {
    let layout = ProjectLayout::resolve(cli.paths.project_root)?
        .with_overrides(cli.paths.source, cli.paths.output_dir);

    let report = IconGenerator::new(AssetConfig::default())
        .generate(&layout.source_image, &layout.icons_dir)?;

    Ok(report.count())
}

fn main() -> ExitCode {
    init_logging();
    let cli = IconsCli::parse();

    match run(cli) {
        Ok(count) => {
            log::info!("🎉 成功生成 {} 个图标！", count);
            ExitCode::SUCCESS
        }
        Err(err) => err.report(),
    }
}
