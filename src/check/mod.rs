//! # PWA 配置检查模块（check）
//!
//! ## 设计思路
//!
//! 与生成器相对应的验证工具：逐项检查 manifest、图标、启动图与 index.html，
//! 每一项独立给出通过/失败，不因单项失败而中断。
//!
//! ## 实现思路
//!
//! - `manifest`：serde 解析 + 必填字段 + 图标文件存在性
//! - 图标与启动图：不仅检查存在，还通过读取图片头校验尺寸
//! - `html`：`RegexSet` 一次性检测必需标签

mod html;
mod manifest;

use std::fs;
use std::path::Path;

use crate::assets::{FAVICON_ICO_NAME, FAVICON_ICO_SIZE, SPLASH_TARGETS, icon_targets};
use crate::layout::{ICONS_DIR, ProjectLayout};

/// manifest 图标地址中默认的部署前缀
pub const DEFAULT_BASE_PATH: &str = "/busly/";

/// 单项检查结果
#[derive(Debug, Clone)]
pub struct CheckItem {
    pub description: String,
    pub passed: bool,
    pub detail: Option<String>,
}

impl CheckItem {
    pub fn pass(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            passed: true,
            detail: None,
        }
    }

    pub fn fail(description: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            passed: false,
            detail: Some(detail.into()),
        }
    }
}

/// 一组检查（对应一个标题）
#[derive(Debug, Clone)]
pub struct CheckSection {
    pub title: &'static str,
    pub items: Vec<CheckItem>,
}

impl CheckSection {
    pub fn passed(&self) -> bool {
        self.items.iter().all(|item| item.passed)
    }
}

/// 完整检查报告
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub sections: Vec<CheckSection>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.sections.iter().all(CheckSection::passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckItem> {
        self.sections.iter().flat_map(|s| s.items.iter()).filter(|item| !item.passed)
    }

    /// 按分组输出每一项的检查结果
    pub fn log(&self) {
        for section in &self.sections {
            log::info!("🔍 {}", section.title);
            for item in &section.items {
                match (item.passed, &item.detail) {
                    (true, _) => log::info!("✅ {}", item.description),
                    (false, Some(detail)) => log::error!("❌ {}: {}", item.description, detail),
                    (false, None) => log::error!("❌ {}", item.description),
                }
            }
        }
    }
}

/// PWA 检查器
pub struct PwaChecker {
    layout: ProjectLayout,
    base_path: String,
}

impl PwaChecker {
    pub fn new(layout: ProjectLayout, base_path: impl Into<String>) -> Self {
        Self {
            layout,
            base_path: base_path.into(),
        }
    }

    /// 执行全部检查
    pub fn run(&self) -> CheckReport {
        CheckReport {
            sections: vec![
                self.check_manifest(),
                self.check_icons(),
                self.check_splash_screens(),
                self.check_index_html(),
            ],
        }
    }

    fn check_manifest(&self) -> CheckSection {
        let title = "manifest.json";
        let path = self.layout.manifest_path();
        let items = match fs::read_to_string(&path) {
            Ok(content) => manifest::check_manifest_content(&content, &self.layout, &self.base_path),
            Err(err) => vec![CheckItem::fail("manifest.json", format!("无法读取: {}", err))],
        };
        CheckSection { title, items }
    }

    fn check_icons(&self) -> CheckSection {
        let mut items: Vec<CheckItem> = icon_targets()
            .into_iter()
            .map(|target| {
                let relative = format!("{}/{}", ICONS_DIR, target.file_name());
                check_image_file(&self.layout, &relative, target.size, target.size)
            })
            .collect();

        items.push(check_image_file(
            &self.layout,
            FAVICON_ICO_NAME,
            FAVICON_ICO_SIZE,
            FAVICON_ICO_SIZE,
        ));

        CheckSection {
            title: "图标",
            items,
        }
    }

    fn check_splash_screens(&self) -> CheckSection {
        let items = SPLASH_TARGETS
            .iter()
            .map(|target| {
                let relative = format!("{}/{}", ICONS_DIR, target.file_name);
                check_image_file(&self.layout, &relative, target.width, target.height)
            })
            .collect();

        CheckSection {
            title: "启动图",
            items,
        }
    }

    fn check_index_html(&self) -> CheckSection {
        let title = "index.html";
        let path = self.layout.index_html_path();
        let items = match fs::read_to_string(&path) {
            Ok(content) => html::check_html_content(&content),
            Err(err) => vec![CheckItem::fail("index.html", format!("无法读取: {}", err))],
        };
        CheckSection { title, items }
    }
}

/// 检查 `public/` 下的图片存在且尺寸符合预期
fn check_image_file(layout: &ProjectLayout, relative: &str, width: u32, height: u32) -> CheckItem {
    let path = layout.public_path(relative);
    let description = format!("{} ({}x{})", relative, width, height);

    if !path.is_file() {
        return CheckItem::fail(description, "文件缺失");
    }

    match read_dimensions(&path) {
        Ok(dims) if dims == (width, height) => CheckItem::pass(description),
        Ok((w, h)) => CheckItem::fail(description, format!("实际尺寸 {}x{}", w, h)),
        Err(err) => CheckItem::fail(description, err),
    }
}

fn read_dimensions(path: &Path) -> Result<(u32, u32), String> {
    image::image_dimensions(path).map_err(|e| format!("无法解码: {}", e))
}
