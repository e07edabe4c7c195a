//! # 背景色解析
//!
//! 支持与 Pillow `ImageColor.getrgb` 一致的写法（不区分大小写）：
//!
//! - `#rgb` / `#rgba` / `#rrggbb` / `#rrggbbaa`
//! - `rgb(r, g, b)` / `rgba(r, g, b, a)`，分量为 0-255 整数或 0-100% 百分比
//! - `hsl(h, s%, l%)` / `hsla(h, s%, l%, a)`
//! - CSS 颜色关键字（完整的 148 个命名颜色）
//!
//! 启动图画布是不透明 RGB，alpha 分量会被解析但丢弃。
//! 解析失败返回 `AssetError::InvalidColor`，启动图生成器会在处理任何尺寸之前拒绝。

use std::str::FromStr;

use image::{Rgb, Rgba};

use super::AssetError;

/// 不透明背景色。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// CSS 命名颜色表。
const NAMED_COLORS: &[(&str, u32)] = &[
    ("aliceblue", 0xf0f8ff),
    ("antiquewhite", 0xfaebd7),
    ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4),
    ("azure", 0xf0ffff),
    ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4),
    ("black", 0x000000),
    ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff),
    ("blueviolet", 0x8a2be2),
    ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887),
    ("cadetblue", 0x5f9ea0),
    ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e),
    ("coral", 0xff7f50),
    ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc),
    ("crimson", 0xdc143c),
    ("cyan", 0x00ffff),
    ("darkblue", 0x00008b),
    ("darkcyan", 0x008b8b),
    ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xa9a9a9),
    ("darkkhaki", 0xbdb76b),
    ("darkmagenta", 0x8b008b),
    ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00),
    ("darkorchid", 0x9932cc),
    ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a),
    ("darkseagreen", 0x8fbc8f),
    ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f),
    ("darkslategrey", 0x2f4f4f),
    ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3),
    ("deeppink", 0xff1493),
    ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222),
    ("floralwhite", 0xfffaf0),
    ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff),
    ("gainsboro", 0xdcdcdc),
    ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700),
    ("goldenrod", 0xdaa520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xadff2f),
    ("grey", 0x808080),
    ("honeydew", 0xf0fff0),
    ("hotpink", 0xff69b4),
    ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082),
    ("ivory", 0xfffff0),
    ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa),
    ("lavenderblush", 0xfff0f5),
    ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd),
    ("lightblue", 0xadd8e6),
    ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff),
    ("lightgoldenrodyellow", 0xfafad2),
    ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90),
    ("lightgrey", 0xd3d3d3),
    ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a),
    ("lightseagreen", 0x20b2aa),
    ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0),
    ("lime", 0x00ff00),
    ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6),
    ("magenta", 0xff00ff),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa),
    ("mediumblue", 0x0000cd),
    ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db),
    ("mediumseagreen", 0x3cb371),
    ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a),
    ("mediumturquoise", 0x48d1cc),
    ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xf5fffa),
    ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5),
    ("navajowhite", 0xffdead),
    ("navy", 0x000080),
    ("oldlace", 0xfdf5e6),
    ("olive", 0x808000),
    ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500),
    ("orangered", 0xff4500),
    ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa),
    ("palegreen", 0x98fb98),
    ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093),
    ("papayawhip", 0xffefd5),
    ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f),
    ("pink", 0xffc0cb),
    ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6),
    ("purple", 0x800080),
    ("rebeccapurple", 0x663399),
    ("red", 0xff0000),
    ("rosybrown", 0xbc8f8f),
    ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513),
    ("salmon", 0xfa8072),
    ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57),
    ("seashell", 0xfff5ee),
    ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0),
    ("skyblue", 0x87ceeb),
    ("slateblue", 0x6a5acd),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f),
    ("steelblue", 0x4682b4),
    ("tan", 0xd2b48c),
    ("teal", 0x008080),
    ("thistle", 0xd8bfd8),
    ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0),
    ("violet", 0xee82ee),
    ("wheat", 0xf5deb3),
    ("white", 0xffffff),
    ("whitesmoke", 0xf5f5f5),
    ("yellow", 0xffff00),
    ("yellowgreen", 0x9acd32),
];

fn invalid(spec: &str, reason: &str) -> AssetError {
    AssetError::InvalidColor(format!("{}：{}", reason, spec))
}

/// 将 0.0-1.0 的通道值四舍五入到 0-255。
fn unit_to_channel(value: f64) -> u8 {
    (value * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8
}

/// 解析百分比分量（`"50%"` → 0.5），范围 0-100%。
fn parse_percent(part: &str, spec: &str) -> Result<f64, AssetError> {
    let value = part
        .strip_suffix('%')
        .ok_or_else(|| invalid(spec, "分量需要百分号"))?
        .trim()
        .parse::<f64>()
        .map_err(|_| invalid(spec, "无法解析百分比"))?;
    if !(0.0..=100.0).contains(&value) {
        return Err(invalid(spec, "百分比超出 0-100%"));
    }
    Ok(value / 100.0)
}

/// 校验 alpha 分量（0-255 或 0-1 或百分比），解析后丢弃。
fn validate_alpha(part: &str, spec: &str) -> Result<(), AssetError> {
    if part.ends_with('%') {
        return parse_percent(part, spec).map(|_| ());
    }
    match part.parse::<f64>() {
        Ok(value) if (0.0..=255.0).contains(&value) => Ok(()),
        _ => Err(invalid(spec, "alpha 分量无效")),
    }
}

/// HSL → RGB（色相为角度，饱和度与亮度为 0-1）。
fn hsl_to_rgb(hue_degrees: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    if saturation == 0.0 {
        let v = unit_to_channel(lightness);
        return (v, v, v);
    }

    let m2 = if lightness <= 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let m1 = 2.0 * lightness - m2;
    let hue = hue_degrees / 360.0;

    let channel = |h: f64| {
        let h = h.rem_euclid(1.0);
        let v = if h < 1.0 / 6.0 {
            m1 + (m2 - m1) * h * 6.0
        } else if h < 0.5 {
            m2
        } else if h < 2.0 / 3.0 {
            m1 + (m2 - m1) * (2.0 / 3.0 - h) * 6.0
        } else {
            m1
        };
        unit_to_channel(v)
    };

    (
        channel(hue + 1.0 / 3.0),
        channel(hue),
        channel(hue - 1.0 / 3.0),
    )
}

impl BackgroundColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    const fn from_hex_value(value: u32) -> Self {
        Self::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    pub fn to_rgb(self) -> Rgb<u8> {
        Rgb([self.r, self.g, self.b])
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }

    fn parse_hex(hex: &str, spec: &str) -> Result<Self, AssetError> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid(spec, "无法解析十六进制颜色"));
        }

        let digits: Vec<u8> = hex
            .chars()
            .filter_map(|c| c.to_digit(16))
            .map(|d| d as u8)
            .collect();

        match digits.len() {
            // #rgb / #rgba
            3 | 4 => Ok(Self::new(digits[0] * 17, digits[1] * 17, digits[2] * 17)),
            // #rrggbb / #rrggbbaa
            6 | 8 => Ok(Self::new(
                digits[0] * 16 + digits[1],
                digits[2] * 16 + digits[3],
                digits[4] * 16 + digits[5],
            )),
            _ => Err(invalid(spec, "十六进制颜色长度无效")),
        }
    }

    fn parse_rgb_function(body: &str, with_alpha: bool, spec: &str) -> Result<Self, AssetError> {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if with_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(invalid(spec, "rgb() 分量个数错误"));
        }
        if with_alpha {
            validate_alpha(parts[3], spec)?;
        }

        let percent = parts[0].ends_with('%');
        let mut channels = [0u8; 3];
        for (slot, part) in channels.iter_mut().zip(&parts[..3]) {
            *slot = if percent {
                unit_to_channel(parse_percent(part, spec)?)
            } else {
                part.parse::<u8>()
                    .map_err(|_| invalid(spec, "rgb() 分量超出 0-255"))?
            };
        }
        Ok(Self::new(channels[0], channels[1], channels[2]))
    }

    fn parse_hsl_function(body: &str, with_alpha: bool, spec: &str) -> Result<Self, AssetError> {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if with_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(invalid(spec, "hsl() 分量个数错误"));
        }
        if with_alpha {
            validate_alpha(parts[3], spec)?;
        }

        let hue = parts[0]
            .trim_end_matches("deg")
            .parse::<f64>()
            .map_err(|_| invalid(spec, "无法解析色相"))?;
        if !hue.is_finite() {
            return Err(invalid(spec, "无法解析色相"));
        }
        let saturation = parse_percent(parts[1], spec)?;
        let lightness = parse_percent(parts[2], spec)?;

        let (r, g, b) = hsl_to_rgb(hue, saturation, lightness);
        Ok(Self::new(r, g, b))
    }
}

/// 取出 `name(...)` 形式的函数体。
fn function_body<'a>(spec: &'a str, name: &str) -> Option<&'a str> {
    spec.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

impl FromStr for BackgroundColor {
    type Err = AssetError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let normalized = spec.trim().to_lowercase();

        if let Some(hex) = normalized.strip_prefix('#') {
            return Self::parse_hex(hex, spec);
        }
        if let Some(body) = function_body(&normalized, "rgba") {
            return Self::parse_rgb_function(body, true, spec);
        }
        if let Some(body) = function_body(&normalized, "rgb") {
            return Self::parse_rgb_function(body, false, spec);
        }
        if let Some(body) = function_body(&normalized, "hsla") {
            return Self::parse_hsl_function(body, true, spec);
        }
        if let Some(body) = function_body(&normalized, "hsl") {
            return Self::parse_hsl_function(body, false, spec);
        }

        NAMED_COLORS
            .binary_search_by(|(name, _)| name.cmp(&normalized.as_str()))
            .map(|idx| Self::from_hex_value(NAMED_COLORS[idx].1))
            .map_err(|_| invalid(spec, "未知颜色"))
    }
}
