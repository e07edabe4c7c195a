//! # 缩放与合成流水线模块
//!
//! ## 设计思路
//!
//! 将"源 RGBA → 目标尺寸 RGBA → 合成到背景"集中管理。
//! 缩放优先走 `fast_image_resize`（SIMD 卷积），失败时回退 `image::imageops::resize`，
//! 两者使用同一滤镜语义，保证画质一致。
//!
//! ## 实现思路
//!
//! 1. 校验目标尺寸非零
//! 2. 构建 `fast_image_resize` 源/目标缓冲并执行卷积缩放
//! 3. 失败时记录告警并回退
//! 4. 启动图：按几何计算结果把 logo 以自身 alpha 为遮罩叠加到纯色背景

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::{ImageBuffer, Rgba, RgbImage, RgbaImage};

use super::AssetError;
use super::color::BackgroundColor;

/// 启动图中 logo 的尺寸与左上角位置。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoPlacement {
    /// logo 边长（正方形）。
    pub size: u32,
    pub x: u32,
    pub y: u32,
}

/// 计算启动图 logo 的边长与居中位置。
///
/// `size = floor(min(width, height) * scale)`，位置使用整数向下取整除法。
///
/// # 示例
/// ```rust
/// use pwa_assets::assets::{LogoPlacement, splash_placement};
///
/// let placement = splash_placement(640, 1136, 0.3);
/// assert_eq!(placement, LogoPlacement { size: 192, x: 224, y: 472 });
/// ```
pub fn splash_placement(width: u32, height: u32, scale: f64) -> LogoPlacement {
    let short_edge = width.min(height);
    let size = ((short_edge as f64 * scale).floor() as u32).min(short_edge);

    LogoPlacement {
        size,
        x: (width - size) / 2,
        y: (height - size) / 2,
    }
}

/// 将 RGBA 图片精确缩放到 `width x height`。
pub fn resize_exact(
    source: &RgbaImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<RgbaImage, AssetError> {
    if width == 0 || height == 0 {
        return Err(AssetError::InvalidDimension(format!(
            "目标尺寸不能为零：{}x{}",
            width, height
        )));
    }

    if source.dimensions() == (width, height) {
        return Ok(source.clone());
    }

    match resize_with_fast_image_resize(source, width, height, filter) {
        Ok(resized) => Ok(resized),
        Err(err) => {
            log::warn!(
                "⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}",
                err
            );
            Ok(image::imageops::resize(source, width, height, filter))
        }
    }
}

fn resize_with_fast_image_resize(
    source: &RgbaImage,
    target_width: u32,
    target_height: u32,
    filter: FilterType,
) -> Result<RgbaImage, AssetError> {
    let (src_width, src_height) = source.dimensions();

    let src_image = fr::images::Image::from_vec_u8(
        src_width,
        src_height,
        source.as_raw().clone(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| AssetError::Resize(format!("构建源图像缓冲失败：{}", e)))?;

    let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

    let mut resizer = fr::Resizer::new();
    let options = fr::ResizeOptions::new()
        .resize_alg(fr::ResizeAlg::Convolution(to_fast_filter(filter)));

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| AssetError::Resize(format!("fast_image_resize 执行失败：{}", e)))?;

    ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| AssetError::Resize("fast_image_resize 输出缓冲长度异常".to_string()))
}

fn to_fast_filter(filter: FilterType) -> fr::FilterType {
    match filter {
        FilterType::Nearest => fr::FilterType::Box,
        FilterType::Triangle => fr::FilterType::Bilinear,
        FilterType::CatmullRom => fr::FilterType::CatmullRom,
        FilterType::Gaussian => fr::FilterType::Mitchell,
        FilterType::Lanczos3 => fr::FilterType::Lanczos3,
    }
}

/// 绘制启动图：纯色背景 + 居中 logo（以 logo 的 alpha 通道为混合遮罩）。
///
/// 返回不透明的 RGB 画布。
pub fn compose_splash(
    logo: &RgbaImage,
    width: u32,
    height: u32,
    background: BackgroundColor,
    scale: f64,
    filter: FilterType,
) -> Result<RgbImage, AssetError> {
    let placement = splash_placement(width, height, scale);

    let mut canvas = RgbaImage::from_pixel(width, height, background.to_rgba());

    if placement.size > 0 {
        let resized = resize_exact(logo, placement.size, placement.size, filter)?;
        image::imageops::overlay(
            &mut canvas,
            &resized,
            placement.x as i64,
            placement.y as i64,
        );
    } else {
        log::warn!("⚠️ 画布 {}x{} 过小，logo 尺寸为 0，仅输出背景", width, height);
    }

    Ok(image::DynamicImage::ImageRgba8(canvas).into_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn checkerboard_logo(size: u32) -> RgbaImage {
        RgbaImage::from_fn(size, size, |x, y| {
            if (x / 8 + y / 8) % 2 == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        })
    }

    #[test]
    fn placement_matches_iphone_se_example() {
        let placement = splash_placement(640, 1136, 0.3);
        assert_eq!(placement.size, 192);
        assert_eq!((placement.x, placement.y), (224, 472));
    }

    #[test]
    fn placement_for_landscape_uses_height() {
        let placement = splash_placement(1001, 333, 0.3);
        assert_eq!(placement.size, 99);
        assert_eq!((placement.x, placement.y), (451, 117));
    }

    #[test]
    fn resize_produces_exact_dimensions() {
        let logo = checkerboard_logo(100);
        for (w, h) in [(72, 72), (16, 16), (512, 512), (30, 45)] {
            let resized = resize_exact(&logo, w, h, FilterType::Lanczos3).expect("resize failed");
            assert_eq!(resized.dimensions(), (w, h));
        }
    }

    #[test]
    fn resize_rejects_zero_dimension() {
        let logo = checkerboard_logo(10);
        let result = resize_exact(&logo, 0, 10, FilterType::Lanczos3);
        assert!(matches!(result, Err(AssetError::InvalidDimension(_))));
    }

    #[test]
    fn splash_keeps_background_outside_logo_box() {
        let logo = checkerboard_logo(64);
        let background = BackgroundColor::new(0x66, 0x7e, 0xea);
        let (width, height) = (90, 160);

        let canvas = compose_splash(&logo, width, height, background, 0.3, FilterType::Lanczos3)
            .expect("compose failed");
        assert_eq!(canvas.dimensions(), (width, height));

        let placement = splash_placement(width, height, 0.3);
        let inside = |x: u32, y: u32| {
            x >= placement.x
                && x < placement.x + placement.size
                && y >= placement.y
                && y < placement.y + placement.size
        };

        for (x, y, pixel) in canvas.enumerate_pixels() {
            if !inside(x, y) {
                assert_eq!(*pixel, background.to_rgb(), "pixel ({}, {}) drifted", x, y);
            }
        }
    }

    #[test]
    fn splash_transparent_logo_leaves_background_untouched() {
        let logo = RgbaImage::from_pixel(32, 32, Rgba([255, 0, 0, 0]));
        let background = BackgroundColor::new(1, 2, 3);

        let canvas = compose_splash(&logo, 50, 80, background, 0.3, FilterType::Lanczos3)
            .expect("compose failed");

        assert!(canvas.pixels().all(|p| *p == background.to_rgb()));
    }

    #[test]
    fn splash_opaque_logo_covers_its_box() {
        let logo = RgbaImage::from_pixel(40, 40, Rgba([10, 200, 30, 255]));
        let background = BackgroundColor::new(255, 255, 255);

        let canvas = compose_splash(&logo, 100, 200, background, 0.3, FilterType::Lanczos3)
            .expect("compose failed");

        let placement = splash_placement(100, 200, 0.3);
        let center = canvas.get_pixel(
            placement.x + placement.size / 2,
            placement.y + placement.size / 2,
        );
        let expected = [10u8, 200, 30];
        for (got, want) in center.0.iter().zip(expected) {
            assert!(got.abs_diff(want) <= 1, "center pixel {:?} != {:?}", center, expected);
        }
    }

    proptest! {
        #[test]
        fn placement_is_centered_and_inside_canvas(width in 1u32..4096, height in 1u32..4096) {
            let placement = splash_placement(width, height, 0.3);

            prop_assert_eq!(placement.size, (width.min(height) as f64 * 0.3).floor() as u32);
            prop_assert!(placement.x + placement.size <= width);
            prop_assert!(placement.y + placement.size <= height);
            prop_assert_eq!(placement.x, (width - placement.size) / 2);
            prop_assert_eq!(placement.y, (height - placement.size) / 2);
        }
    }
}
