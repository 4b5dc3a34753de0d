use image::RgbaImage;

use crate::geometry::SampleRect;
use crate::stats::{ColorSample, PixelRegion};

/// Mean RGB over the pixels enclosed by `extent` (bottom-left-origin sample
/// convention), normalized to [0,1] per channel.
///
/// Degenerate extents (no area after clamping, or entirely off-image) yield
/// a black sample; this is the degenerate visual result, not a failure.
pub fn mean_color(image: &RgbaImage, extent: SampleRect) -> ColorSample {
    let Some(region) = PixelRegion::resolve(extent, image.width(), image.height()) else {
        return ColorSample::default();
    };

    let mut sum = [0u64; 3];
    for y in region.y..region.y + region.height {
        for x in region.x..region.x + region.width {
            let px = image.get_pixel(x, y);
            sum[0] += px[0] as u64;
            sum[1] += px[1] as u64;
            sum[2] += px[2] as u64;
        }
    }

    let count = (region.width as u64 * region.height as u64) as f32;
    ColorSample {
        red: sum[0] as f32 / count / 255.0,
        green: sum[1] as f32 / count / 255.0,
        blue: sum[2] as f32 / count / 255.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn uniform_region_returns_that_color() {
        let image = RgbaImage::from_pixel(64, 64, Rgba([255, 0, 128, 255]));
        let sample = mean_color(&image, SampleRect::new(8.0, 8.0, 16.0, 16.0));
        assert!((sample.red - 1.0).abs() < 1e-6);
        assert!(sample.green.abs() < 1e-6);
        assert!((sample.blue - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn empty_region_is_black() {
        let image = RgbaImage::from_pixel(64, 64, Rgba([255, 255, 255, 255]));
        let sample = mean_color(&image, SampleRect::new(100.0, 100.0, 10.0, 10.0));
        assert_eq!(sample, ColorSample::default());
    }
}
