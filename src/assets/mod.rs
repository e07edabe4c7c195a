//! # 资源生成模块（assets）
//!
//! ## 设计思路
//!
//! 该模块将"源图加载 → 缩放/合成 → 编码写盘"按职责拆分为多个子模块，
//! 两个生成器只负责编排，不直接处理像素或文件格式。
//!
//! - `icons`：图标生成器（遇错即停）
//! - `splash`：启动图生成器（逐尺寸容错，汇总成功率）
//! - `source`：源图片存在性检查与 RGBA 加载
//! - `pipeline`：缩放、logo 几何计算、背景合成
//! - `encoder`：PNG / ICO 编码与写盘
//! - `color`：背景色字符串解析
//! - `targets`：固定尺寸列表
//! - `config/error`：配置与错误
//!
//! ## 调用链
//!
//! ```text
//! bin/generate_pwa_icons.rs         bin/generate_splash_screens.rs
//!          ↓                                   ↓
//!   IconGenerator::generate            SplashGenerator::generate
//!          ├─ source.rs（加载 + RGBA）          ├─ color.rs（背景色）
//!          ├─ pipeline.rs（缩放）               ├─ source.rs / pipeline.rs（合成）
//!          └─ encoder.rs（PNG / ICO）           └─ encoder.rs（RGB PNG）
//! ```

mod color;
mod config;
mod encoder;
mod error;
mod icons;
mod pipeline;
mod source;
mod splash;
mod targets;

pub use color::BackgroundColor;
pub use config::{AssetConfig, DEFAULT_BACKGROUND, DEFAULT_LOGO_SCALE};
pub use encoder::ensure_dir;
pub use error::AssetError;
pub use icons::{IconGenerator, IconReport, favicon_ico_path};
pub use pipeline::{LogoPlacement, compose_splash, resize_exact, splash_placement};
pub use source::SourceImage;
pub use splash::{SplashFailure, SplashGenerator, SplashReport};
pub use targets::{
    FAVICON_ICO_NAME, FAVICON_ICO_SIZE, FAVICON_SIZES, ICON_SIZES, IconKind, IconTarget,
    SPLASH_TARGETS, SplashTarget, icon_targets,
};
