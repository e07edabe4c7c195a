//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义全局统一的 `AppError` 枚举，三个命令行工具的入口都返回
//! `Result<_, AppError>`，由入口统一记录日志并转换为退出码。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `AssetError` 与 `std::io::Error` 提供 `From` 转换，入口可直接使用 `?`。

use std::process::ExitCode;

use crate::assets::AssetError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 资源生成链路错误（加载 / 缩放 / 编码 / 写盘）
    #[error("{0}")]
    Asset(#[from] AssetError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// 项目目录无法解析
    #[error("项目目录不可用: {0}")]
    Layout(String),

    /// PWA 检查未通过
    #[error("PWA 检查未通过: {0}")]
    Check(String),
}

impl AppError {
    /// 源文件缺失时给出额外提示
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Asset(AssetError::SourceMissing(_)) => {
                Some("请确认 'busly-logo-only.png' 位于 public/ 目录下，或使用 --source 指定")
            }
            Self::Check(_) => Some("可运行生成工具：generate-pwa-icons / generate-splash-screens"),
            _ => None,
        }
    }

    /// 记录错误并转换为失败退出码
    pub fn report(&self) -> ExitCode {
        log::error!("❌ {}", self);
        if let Some(hint) = self.hint() {
            log::info!("💡 {}", hint);
        }
        ExitCode::FAILURE
    }
}
