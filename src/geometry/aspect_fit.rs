use crate::geometry::SampleRect;

/// Scales `source` uniformly to fit inside `target` and centers it there.
///
/// Tries the horizontal scale first and falls back to the vertical scale when
/// the scaled height would overflow the target; same outcome as
/// `min(target.w / source.w, target.h / source.h)`.
///
/// Precondition: `source` must have strictly positive width and height. A
/// zero-size source is a programmer error and asserts rather than returning
/// NaN/Inf geometry.
pub fn aspect_fit(source: SampleRect, target: SampleRect) -> SampleRect {
    assert!(
        source.width > 0.0 && source.height > 0.0,
        "aspect_fit source must have positive dimensions, got {}x{}",
        source.width,
        source.height,
    );

    let scale = {
        let horizontal = target.width / source.width;
        if source.height * horizontal <= target.height {
            horizontal
        } else {
            target.height / source.height
        }
    };

    let width = source.width * scale;
    let height = source.height * scale;

    SampleRect {
        x: target.x + (target.width - width) / 2.0,
        y: target.y + (target.height - height) / 2.0,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tall_source_centers_horizontally() {
        let fitted = aspect_fit(
            SampleRect::new(0.0, 0.0, 100.0, 200.0),
            SampleRect::new(0.0, 0.0, 50.0, 50.0),
        );
        assert_eq!(fitted, SampleRect::new(12.5, 0.0, 25.0, 50.0));
    }

    #[test]
    fn wide_source_centers_vertically() {
        let fitted = aspect_fit(
            SampleRect::new(0.0, 0.0, 200.0, 100.0),
            SampleRect::new(0.0, 0.0, 100.0, 100.0),
        );
        assert_eq!(fitted, SampleRect::new(0.0, 25.0, 100.0, 50.0));
    }

    #[test]
    fn target_offset_is_respected() {
        let fitted = aspect_fit(
            SampleRect::new(0.0, 0.0, 10.0, 10.0),
            SampleRect::new(100.0, 40.0, 60.0, 20.0),
        );
        assert_eq!(fitted, SampleRect::new(120.0, 40.0, 20.0, 20.0));
    }

    #[test]
    #[should_panic(expected = "positive dimensions")]
    fn zero_size_source_panics() {
        aspect_fit(
            SampleRect::new(0.0, 0.0, 0.0, 100.0),
            SampleRect::new(0.0, 0.0, 50.0, 50.0),
        );
    }
}
