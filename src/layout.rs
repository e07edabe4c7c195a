//! 项目目录约定模块
//!
//! # 设计思路
//!
//! 统一管理 `public/` 目录下的输入输出路径，三个工具共享同一套约定：
//!
//! ```text
//! <project_root>/
//! ├─ index.html
//! └─ public/
//!    ├─ busly-logo-only.png   源 logo
//!    ├─ manifest.json
//!    ├─ favicon.ico
//!    └─ icons/                图标与启动图输出目录
//! ```
//!
//! # 实现思路
//!
//! - 默认以当前工作目录为项目根目录，可通过命令行覆盖。
//! - 命令行显式给出的源文件 / 输出目录优先于约定路径。
//! - 所有可能失败的操作均返回 `Result`，不使用 `expect()` / `unwrap()`。

use std::path::{Path, PathBuf};

use crate::error::AppError;

pub const PUBLIC_DIR: &str = "public";
pub const ICONS_DIR: &str = "icons";
pub const SOURCE_LOGO: &str = "busly-logo-only.png";
pub const MANIFEST_FILE: &str = "manifest.json";
pub const INDEX_HTML: &str = "index.html";

/// 项目路径布局
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub public_dir: PathBuf,
    pub source_image: PathBuf,
    pub icons_dir: PathBuf,
}

impl ProjectLayout {
    /// 基于项目根目录构建约定路径
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let public_dir = root.join(PUBLIC_DIR);
        Self {
            source_image: public_dir.join(SOURCE_LOGO),
            icons_dir: public_dir.join(ICONS_DIR),
            public_dir,
            root,
        }
    }

    /// 解析项目根目录
    ///
    /// # 参数
    /// * `root` - 命令行指定的根目录（可选），未指定时使用当前工作目录
    ///
    /// # 返回
    /// - `Ok(ProjectLayout)` — 解析后的布局
    /// - `Err(AppError::Io)` — 指定的根目录不存在或无法访问
    /// - `Err(AppError::Layout)` — 无法获取当前工作目录
    pub fn resolve(root: Option<PathBuf>) -> Result<Self, AppError> {
        let root = match root {
            Some(dir) => std::fs::canonicalize(dir)?,
            None => std::env::current_dir()
                .map_err(|e| AppError::Layout(format!("获取当前工作目录失败: {}", e)))?,
        };
        Ok(Self::from_root(root))
    }

    /// 应用命令行覆盖的源文件与输出目录
    pub fn with_overrides(mut self, source: Option<PathBuf>, output_dir: Option<PathBuf>) -> Self {
        if let Some(source) = source {
            self.source_image = source;
        }
        if let Some(dir) = output_dir {
            self.icons_dir = dir;
        }
        self
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.public_dir.join(MANIFEST_FILE)
    }

    pub fn index_html_path(&self) -> PathBuf {
        self.root.join(INDEX_HTML)
    }

    /// `public/` 下的相对路径转绝对路径
    pub fn public_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.public_dir.join(relative)
    }
}
