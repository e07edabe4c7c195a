//! index.html 的 PWA 标签检测
//!
//! 使用 `RegexSet` 一次性匹配全部标签，首次调用时通过 `once_cell::sync::Lazy` 编译。

use once_cell::sync::Lazy;
use regex::RegexSet;

use super::CheckItem;

/// 必需标签的描述，与 `HTML_PATTERNS` 下标一一对应
const HTML_CHECKS: [&str; 5] = [
    "manifest.json 链接",
    "theme-color meta 标签",
    "Apple Touch 图标",
    "Apple PWA meta 标签",
    "iOS 启动图",
];

static HTML_PATTERNS: Lazy<Result<RegexSet, regex::Error>> = Lazy::new(|| {
    RegexSet::new([
        r#"<link\s+rel="manifest""#,
        r#"<meta\s+name="theme-color""#,
        r#"<link\s+rel="apple-touch-icon""#,
        r#"<meta\s+name="apple-mobile-web-app-capable""#,
        r#"<link\s+rel="apple-touch-startup-image""#,
    ])
});

/// 检查 HTML 内容，返回每个标签的检测结果
pub(super) fn check_html_content(content: &str) -> Vec<CheckItem> {
    let patterns = match &*HTML_PATTERNS {
        Ok(patterns) => patterns,
        Err(err) => {
            return vec![CheckItem::fail("index.html 标签规则", format!("正则编译失败: {}", err))];
        }
    };

    let matched = patterns.matches(content);
    HTML_CHECKS
        .iter()
        .enumerate()
        .map(|(idx, description)| {
            if matched.matched(idx) {
                CheckItem::pass(*description)
            } else {
                CheckItem::fail(*description, "缺失")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_all_tags() {
        let html = r##"<head>
<link rel="manifest" href="/manifest.json">
<meta name="theme-color" content="#667eea">
<link rel="apple-touch-icon" href="/icons/icon-192x192.png">
<meta name="apple-mobile-web-app-capable" content="yes">
<link rel="apple-touch-startup-image" href="/icons/splash-640x1136.png">
</head>"##;
        let items = check_html_content(html);
        assert_eq!(items.len(), 5);
        assert!(items.iter().all(|item| item.passed));
    }

    #[test]
    fn reports_missing_tags() {
        let html = r#"<link rel="manifest" href="/manifest.json">"#;
        let items = check_html_content(html);
        assert!(items[0].passed);
        assert_eq!(items.iter().filter(|item| !item.passed).count(), 4);
    }
}
