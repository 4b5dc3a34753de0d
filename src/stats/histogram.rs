use image::RgbaImage;
use plotters::prelude::*;

use crate::geometry::SampleRect;
use crate::stats::{HistogramConfig, PixelRegion};

/// Per-channel bucket counts over a sample region.
#[derive(Debug, Clone)]
pub struct ChannelHistogram {
    pub red: Vec<u32>,
    pub green: Vec<u32>,
    pub blue: Vec<u32>,
    /// Pixels counted; zero for a degenerate region.
    pub total: u64,
}

impl ChannelHistogram {
    fn empty(bucket_count: usize) -> Self {
        Self {
            red: vec![0; bucket_count],
            green: vec![0; bucket_count],
            blue: vec![0; bucket_count],
            total: 0,
        }
    }
}

/// Buckets the RGB channels of the pixels enclosed by `extent`
/// (bottom-left-origin sample convention) into `config.bucket_count` buckets.
pub fn channel_histogram(
    image: &RgbaImage,
    extent: SampleRect,
    config: &HistogramConfig,
) -> ChannelHistogram {
    let mut histogram = ChannelHistogram::empty(config.bucket_count);

    let Some(region) = PixelRegion::resolve(extent, image.width(), image.height()) else {
        return histogram;
    };

    for y in region.y..region.y + region.height {
        for x in region.x..region.x + region.width {
            let px = image.get_pixel(x, y);
            histogram.red[bucket_of(px[0], config.bucket_count)] += 1;
            histogram.green[bucket_of(px[1], config.bucket_count)] += 1;
            histogram.blue[bucket_of(px[2], config.bucket_count)] += 1;
        }
    }
    histogram.total = region.width as u64 * region.height as u64;

    histogram
}

fn bucket_of(value: u8, bucket_count: usize) -> usize {
    (value as usize * bucket_count / 256).min(bucket_count - 1)
}

/// Renders a histogram as an RGBA image, one pixel column per bucket.
///
/// Bar heights are normalized frequencies multiplied by `config.scale` and
/// clamped to the display height, so small regions still produce readable
/// bars. A histogram with no counted pixels renders as the bare background.
pub fn render_histogram(
    histogram: &ChannelHistogram,
    config: &HistogramConfig,
) -> Result<RgbaImage, String> {
    let width = config.bucket_count as u32;
    let height = config.display_height;
    if width == 0 || height == 0 {
        return Ok(RgbaImage::new(0, 0));
    }

    let pixel_count = width as usize * height as usize;
    let mut rgb = vec![0u8; pixel_count * 3];

    {
        let root = BitMapBackend::with_buffer(&mut rgb, (width, height)).into_drawing_area();
        root.fill(&RGBColor(18, 18, 18)).map_err(|e| e.to_string())?;

        if histogram.total > 0 {
            let channels: [(&[u32], RGBColor); 3] = [
                (&histogram.red, RGBColor(220, 60, 60)),
                (&histogram.green, RGBColor(60, 200, 90)),
                (&histogram.blue, RGBColor(80, 110, 230)),
            ];

            for (counts, color) in channels {
                for (bucket, &count) in counts.iter().enumerate() {
                    if count == 0 {
                        continue;
                    }
                    let frequency = count as f32 / histogram.total as f32;
                    let bar = (frequency * config.scale * height as f32)
                        .min(height as f32)
                        .round() as i32;
                    if bar <= 0 {
                        continue;
                    }
                    let x = bucket as i32;
                    let bottom = height as i32 - 1;
                    root.draw(&PathElement::new(
                        [(x, bottom), (x, bottom - bar + 1)],
                        color.mix(0.7),
                    ))
                    .map_err(|e| e.to_string())?;
                }
            }
        }

        root.present().map_err(|e| e.to_string())?;
    }

    let mut rgba = vec![255u8; pixel_count * 4];
    for i in 0..pixel_count {
        rgba[i * 4] = rgb[i * 3];
        rgba[i * 4 + 1] = rgb[i * 3 + 1];
        rgba[i * 4 + 2] = rgb[i * 3 + 2];
    }

    RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| "histogram buffer dimensions mismatch".to_string())
}
