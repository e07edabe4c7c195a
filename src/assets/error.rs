//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载资源生成链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配
//! （例如启动图生成器需要区分"源文件缺失"与"单个尺寸失败"）。

use std::path::PathBuf;

/// 资源生成统一错误类型。
///
/// 该类型会在二进制入口被上转为 `AppError`，最终输出到控制台。
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("源图片不存在：{}", .0.display())]
    SourceMissing(PathBuf),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("缩放错误：{0}")]
    Resize(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("无效颜色：{0}")]
    InvalidColor(String),

    #[error("无效尺寸：{0}")]
    InvalidDimension(String),
}
