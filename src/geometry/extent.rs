use crate::geometry::SampleRect;

/// Flips a display-space rect (top-left origin) into the bottom-left-origin
/// convention the statistics provider expects, about `reference_height`.
///
/// One-way: the sample-space form is recomputed fresh from the display rect
/// every update and never stored or fed back.
pub fn flipped_extent(rect: SampleRect, reference_height: f32) -> SampleRect {
    SampleRect {
        x: rect.x,
        y: reference_height - rect.y,
        width: rect.width,
        height: -rect.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_matches_reference_convention() {
        let extent = flipped_extent(SampleRect::new(0.0, 0.0, 100.0, 50.0), 640.0);
        assert_eq!(extent, SampleRect::new(0.0, 640.0, 100.0, -50.0));
    }

    #[test]
    fn x_axis_is_untouched() {
        let extent = flipped_extent(SampleRect::new(200.0, 200.0, 240.0, 240.0), 640.0);
        assert_eq!(extent.x, 200.0);
        assert_eq!(extent.width, 240.0);
        assert_eq!(extent.y, 440.0);
        assert_eq!(extent.height, -240.0);
    }
}
