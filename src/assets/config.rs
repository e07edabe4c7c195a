//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有"可调策略"集中到 `AssetConfig`，保证生成行为可观测、可测试。
//! 目标尺寸列表是固定常量（见 `targets`），不在此处配置；这里只放
//! 影响画质与编码的参数。
//!
//! ## 实现思路
//!
//! - `Default` 提供生产可用的高质量配置（Lanczos3 + 最高压缩）。
//! - 测试可以通过结构体更新语法降低压缩级别以缩短耗时。

use image::codecs::png::{CompressionType, FilterType as PngFilterType};
use image::imageops::FilterType;

/// 启动图默认背景色（与 manifest 的主题色一致）。
pub const DEFAULT_BACKGROUND: &str = "#667eea";

/// 启动图中 logo 边长占屏幕短边的比例。
pub const DEFAULT_LOGO_SCALE: f64 = 0.3;

/// 资源生成配置。
#[derive(Debug, Clone)]
pub struct AssetConfig {
    /// 缩放滤镜策略。
    pub resize_filter: FilterType,
    /// PNG 压缩级别。
    pub png_compression: CompressionType,
    /// PNG 行过滤策略。
    pub png_filter: PngFilterType,
    /// 启动图 logo 缩放比例（相对屏幕短边）。
    pub logo_scale: f64,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            resize_filter: FilterType::Lanczos3,
            png_compression: CompressionType::Best,
            png_filter: PngFilterType::Adaptive,
            logo_scale: DEFAULT_LOGO_SCALE,
        }
    }
}

impl AssetConfig {
    /// 测试用的快速配置：保持滤镜不变，只降低压缩开销。
    pub fn fast() -> Self {
        Self {
            png_compression: CompressionType::Fast,
            ..Self::default()
        }
    }
}
