//! # PWA 配置检查工具
//!
//! 检查 manifest.json、生成的图标与启动图以及 index.html 中的 PWA 标签。

use std::process::ExitCode;

use clap::Parser;
use pwa_assets::check::PwaChecker;
use pwa_assets::cli::{CheckCli, init_logging};
use pwa_assets::error::AppError;
use pwa_assets::layout::ProjectLayout;

fn run(cli: CheckCli) -> Result<(), AppError> {
    let layout = ProjectLayout::resolve(cli.project_root)?;
    log::info!("🚀 检查 PWA 配置：{}", layout.root.display());

    let report = PwaChecker::new(layout, cli.base_path).run();
    report.log();

    let failed = report.failures().count();
    if failed > 0 {
        return Err(AppError::Check(format!("{} 项缺失或无效", failed)));
    }

    log::info!("🎉 PWA 配置完整有效");
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let cli = CheckCli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => err.report(),
    }
}
