//! # 目标尺寸列表
//!
//! 图标、favicon 与启动图的尺寸都是硬编码常量，运行时不可配置。

/// PWA 图标边长。
pub const ICON_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

/// favicon PNG 边长。
pub const FAVICON_SIZES: [u32; 3] = [16, 32, 48];

/// `favicon.ico` 边长。
pub const FAVICON_ICO_SIZE: u32 = 32;

/// `favicon.ico` 文件名（写在图标目录的上一级）。
pub const FAVICON_ICO_NAME: &str = "favicon.ico";

/// 图标种类，决定输出文件名前缀。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Icon,
    Favicon,
}

/// 单个方形图标目标。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTarget {
    pub size: u32,
    pub kind: IconKind,
}

impl IconTarget {
    /// 输出文件名，例如 `icon-72x72.png` / `favicon-16x16.png`。
    pub fn file_name(&self) -> String {
        let prefix = match self.kind {
            IconKind::Icon => "icon",
            IconKind::Favicon => "favicon",
        };
        format!("{}-{}x{}.png", prefix, self.size, self.size)
    }
}

/// 按生成顺序返回全部 PNG 图标目标（先图标，后 favicon）。
pub fn icon_targets() -> Vec<IconTarget> {
    ICON_SIZES
        .iter()
        .map(|&size| IconTarget {
            size,
            kind: IconKind::Icon,
        })
        .chain(FAVICON_SIZES.iter().map(|&size| IconTarget {
            size,
            kind: IconKind::Favicon,
        }))
        .collect()
}

/// 单个启动图目标。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashTarget {
    pub width: u32,
    pub height: u32,
    pub file_name: &'static str,
    /// 对应设备（仅用于日志）。
    pub device: &'static str,
}

const fn splash(
    width: u32,
    height: u32,
    file_name: &'static str,
    device: &'static str,
) -> SplashTarget {
    SplashTarget {
        width,
        height,
        file_name,
        device,
    }
}

/// 启动图目标列表。
pub const SPLASH_TARGETS: [SplashTarget; 12] = [
    // iPhone
    splash(640, 1136, "splash-640x1136.png", "iPhone SE"),
    splash(750, 1334, "splash-750x1334.png", "iPhone 8"),
    splash(1242, 2208, "splash-1242x2208.png", "iPhone 8 Plus"),
    splash(1125, 2436, "splash-1125x2436.png", "iPhone X/XS"),
    splash(828, 1792, "splash-828x1792.png", "iPhone XR"),
    splash(1242, 2688, "splash-1242x2688.png", "iPhone XS Max"),
    // iPad
    splash(1536, 2048, "splash-1536x2048.png", "iPad"),
    splash(1668, 2224, "splash-1668x2224.png", "iPad Pro 10.5\""),
    splash(1668, 2388, "splash-1668x2388.png", "iPad Pro 11\""),
    splash(2048, 2732, "splash-2048x2732.png", "iPad Pro 12.9\""),
    // Android
    splash(1080, 1920, "splash-1080x1920.png", "Android FHD"),
    splash(1440, 2560, "splash-1440x2560.png", "Android QHD"),
];
