use image::{Rgba, RgbaImage};

/// Generates the stand-in photograph the sampler opens at startup.
///
/// 640x640: a vertical sky gradient, a warm sun disc, and darker ground
/// bands, with enough tonal variety that the swatch and histogram visibly
/// react as the sample rectangle moves.
///
/// # Arguments
///
/// * `path` - The file path where the image should be saved
pub fn generate_sample_photo(path: &str) -> Result<(), String> {
    let width = 640u32;
    let height = 640u32;

    let mut img = RgbaImage::new(width, height);

    // Sky: deep blue at the top fading to pale near the horizon.
    let horizon = (height as f32 * 0.62) as u32;
    for y in 0..horizon {
        let t = y as f32 / horizon as f32;
        let r = (40.0 + 160.0 * t) as u8;
        let g = (90.0 + 130.0 * t) as u8;
        let b = (170.0 + 70.0 * t) as u8;
        for x in 0..width {
            img.put_pixel(x, y, Rgba([r, g, b, 255]));
        }
    }

    // Ground: three darker green-brown bands.
    for y in horizon..height {
        let band = ((y - horizon) * 3 / (height - horizon)).min(2);
        let color = match band {
            0 => Rgba([96, 128, 56, 255]),
            1 => Rgba([72, 104, 44, 255]),
            _ => Rgba([56, 72, 40, 255]),
        };
        for x in 0..width {
            img.put_pixel(x, y, color);
        }
    }

    // Sun disc, upper right.
    let (cx, cy, radius) = (width as f32 * 0.72, height as f32 * 0.22, 70.0f32);
    for y in 0..horizon {
        for x in 0..width {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            if dx * dx + dy * dy <= radius * radius {
                img.put_pixel(x, y, Rgba([250, 214, 96, 255]));
            }
        }
    }

    img.save(path).map_err(|e| e.to_string())
}
