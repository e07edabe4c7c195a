//! manifest.json 校验
//!
//! 必填字段需为非空字符串，`icons` 需为非空数组；每个图标的 `src` 去掉站点源与部署前缀后，
//! 必须能在 `public/` 下找到对应文件。

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use super::CheckItem;
use crate::layout::ProjectLayout;

#[derive(Debug, Deserialize)]
pub(super) struct Manifest {
    name: Option<String>,
    short_name: Option<String>,
    start_url: Option<String>,
    display: Option<String>,
    #[serde(default)]
    icons: Vec<ManifestIcon>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ManifestIcon {
    src: String,
    #[serde(default)]
    sizes: Option<String>,
}

static ORIGIN_PREFIX: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://[^/]+"));

/// 将 manifest 中的图标地址转换为 `public/` 下的相对路径
pub(super) fn resolve_icon_src(src: &str, base_path: &str) -> String {
    let without_origin = match &*ORIGIN_PREFIX {
        Ok(re) => re.replace(src, "").into_owned(),
        Err(_) => src.to_string(),
    };

    let base = base_path.trim_end_matches('/');
    let without_base = if !base.is_empty() && without_origin.starts_with(&format!("{}/", base)) {
        &without_origin[base.len()..]
    } else {
        without_origin.as_str()
    };

    without_base.trim_start_matches('/').to_string()
}

fn required_field(items: &mut Vec<CheckItem>, field: &str, value: &Option<String>) {
    let description = format!("字段 \"{}\"", field);
    match value {
        Some(v) if !v.trim().is_empty() => items.push(CheckItem::pass(description)),
        _ => items.push(CheckItem::fail(description, "必填字段缺失")),
    }
}

/// 校验 manifest 内容
pub(super) fn check_manifest_content(
    content: &str,
    layout: &ProjectLayout,
    base_path: &str,
) -> Vec<CheckItem> {
    let manifest: Manifest = match serde_json::from_str(content) {
        Ok(manifest) => manifest,
        Err(err) => {
            return vec![CheckItem::fail("manifest.json 解析", err.to_string())];
        }
    };

    let mut items = Vec::new();
    required_field(&mut items, "name", &manifest.name);
    required_field(&mut items, "short_name", &manifest.short_name);
    required_field(&mut items, "start_url", &manifest.start_url);
    required_field(&mut items, "display", &manifest.display);

    if manifest.icons.is_empty() {
        items.push(CheckItem::fail("字段 \"icons\"", "未定义任何图标"));
        return items;
    }
    items.push(CheckItem::pass(format!("定义了 {} 个图标", manifest.icons.len())));

    for icon in &manifest.icons {
        let relative = resolve_icon_src(&icon.src, base_path);
        let description = format!("图标 {}", icon.sizes.as_deref().unwrap_or(&icon.src));
        if layout.public_path(&relative).is_file() {
            items.push(CheckItem::pass(description));
        } else {
            items.push(CheckItem::fail(description, format!("文件缺失: {}", relative)));
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_origin_and_base_path() {
        assert_eq!(
            resolve_icon_src("https://example.github.io/busly/icons/icon-72x72.png", "/busly/"),
            "icons/icon-72x72.png"
        );
        assert_eq!(resolve_icon_src("/busly/icons/icon-96x96.png", "/busly/"), "icons/icon-96x96.png");
        assert_eq!(resolve_icon_src("icons/icon-96x96.png", "/busly/"), "icons/icon-96x96.png");
        assert_eq!(resolve_icon_src("/icons/icon-96x96.png", "/"), "icons/icon-96x96.png");
    }

    #[test]
    fn base_path_prefix_must_end_at_segment() {
        assert_eq!(resolve_icon_src("/buslyx/icon.png", "/busly"), "buslyx/icon.png");
    }

    #[test]
    fn reports_missing_required_fields_and_icons() {
        let layout = ProjectLayout::from_root("/nonexistent");
        let items = check_manifest_content(r#"{"name": "Busly", "display": ""}"#, &layout, "/busly/");

        let failed: Vec<_> = items.iter().filter(|item| !item.passed).collect();
        assert_eq!(failed.len(), 4);
    }

    #[test]
    fn rejects_malformed_json() {
        let layout = ProjectLayout::from_root("/nonexistent");
        let items = check_manifest_content("{ not json", &layout, "/busly/");
        assert_eq!(items.len(), 1);
        assert!(!items[0].passed);
    }
}
