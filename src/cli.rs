//! 命令行参数与日志初始化
//!
//! 三个工具都可以不带参数运行，此时路径全部按 `public/` 约定推导。

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::assets::DEFAULT_BACKGROUND;
use crate::check::DEFAULT_BASE_PATH;

/// 初始化日志（默认 info 级别，可通过 `RUST_LOG` 覆盖）
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// 两个生成器共享的路径参数
#[derive(Debug, Clone, Args)]
pub struct PathArgs {
    /// 项目根目录（默认：当前工作目录）
    #[arg(long)]
    pub project_root: Option<PathBuf>,

    /// 源 logo 路径（默认：<root>/public/busly-logo-only.png）
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// 输出目录（默认：<root>/public/icons）
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

/// 生成 PWA 图标与 favicon
#[derive(Debug, Parser)]
#[command(name = "generate-pwa-icons", version)]
pub struct IconsCli {
    #[command(flatten)]
    pub paths: PathArgs,
}

/// 生成 PWA 启动图
#[derive(Debug, Parser)]
#[command(name = "generate-splash-screens", version)]
pub struct SplashCli {
    #[command(flatten)]
    pub paths: PathArgs,

    /// 背景色（#rrggbb / rgb() / hsl() / CSS 颜色关键字）
    #[arg(long, default_value = DEFAULT_BACKGROUND)]
    pub background: String,
}

/// 检查 PWA 配置与资源
#[derive(Debug, Parser)]
#[command(name = "check-pwa", version)]
pub struct CheckCli {
    /// 项目根目录（默认：当前工作目录）
    #[arg(long)]
    pub project_root: Option<PathBuf>,

    /// manifest 图标地址中的部署前缀
    #[arg(long, default_value = DEFAULT_BASE_PATH)]
    pub base_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generators_run_without_arguments() {
        let icons = IconsCli::try_parse_from(["generate-pwa-icons"]).expect("parse failed");
        assert!(icons.paths.project_root.is_none());
        assert!(icons.paths.source.is_none());

        let splash = SplashCli::try_parse_from(["generate-splash-screens"]).expect("parse failed");
        assert_eq!(splash.background, "#667eea");
    }

    #[test]
    fn splash_accepts_overrides() {
        let splash = SplashCli::try_parse_from([
            "generate-splash-screens",
            "--background",
            "white",
            "--output-dir",
            "/tmp/out",
        ])
        .expect("parse failed");
        assert_eq!(splash.background, "white");
        assert_eq!(splash.paths.output_dir, Some(PathBuf::from("/tmp/out")));
    }
}
