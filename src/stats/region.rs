use crate::geometry::SampleRect;

/// A sample extent resolved to whole pixel rows of a concrete image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRegion {
    /// Resolves a bottom-left-origin extent (the provider-side convention,
    /// see `geometry::flipped_extent`) into top-left pixel rows, clamped to
    /// the image bounds.
    ///
    /// Extents with negative width/height are normalized here, so an
    /// inside-out drag samples the same pixels as its normalized twin. A
    /// region that ends up outside the image or with no area resolves to
    /// `None`; callers treat that as a degenerate sample, not an error.
    pub fn resolve(extent: SampleRect, image_width: u32, image_height: u32) -> Option<PixelRegion> {
        let left = extent.min_x();
        let right = extent.max_x();
        // Bottom-left origin: min_y/max_y are the bottom and top edges.
        let top_row = image_height as f32 - extent.max_y();
        let bottom_row = image_height as f32 - extent.min_y();

        let x0 = left.max(0.0).floor() as i64;
        let y0 = top_row.max(0.0).floor() as i64;
        let x1 = (right.min(image_width as f32).ceil() as i64).min(image_width as i64);
        let y1 = (bottom_row.min(image_height as f32).ceil() as i64).min(image_height as i64);

        if x1 <= x0 || y1 <= y0 {
            return None;
        }

        Some(PixelRegion {
            x: x0 as u32,
            y: y0 as u32,
            width: (x1 - x0) as u32,
            height: (y1 - y0) as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::flipped_extent;

    #[test]
    fn flipped_display_rect_resolves_to_its_own_rows() {
        // A display rect at rows 200..440 must sample exactly those rows once
        // it has been through the display -> sample flip.
        let display = SampleRect::new(200.0, 200.0, 240.0, 240.0);
        let extent = flipped_extent(display, 640.0);
        let region = PixelRegion::resolve(extent, 640, 640).unwrap();
        assert_eq!(
            region,
            PixelRegion {
                x: 200,
                y: 200,
                width: 240,
                height: 240
            }
        );
    }

    #[test]
    fn negative_extent_matches_normalized_twin() {
        let inside_out = SampleRect::new(300.0, 100.0, -100.0, 50.0);
        let normalized = SampleRect::new(200.0, 100.0, 100.0, 50.0);
        assert_eq!(
            PixelRegion::resolve(inside_out, 640, 640),
            PixelRegion::resolve(normalized, 640, 640)
        );
    }

    #[test]
    fn fully_outside_region_is_degenerate() {
        let extent = SampleRect::new(700.0, 0.0, 50.0, 50.0);
        assert_eq!(PixelRegion::resolve(extent, 640, 640), None);
    }

    #[test]
    fn region_is_clamped_to_image_bounds() {
        let extent = SampleRect::new(-20.0, -20.0, 700.0, 700.0);
        let region = PixelRegion::resolve(extent, 640, 640).unwrap();
        assert_eq!(
            region,
            PixelRegion {
                x: 0,
                y: 0,
                width: 640,
                height: 640
            }
        );
    }
}
