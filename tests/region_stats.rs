use image::{Rgba, RgbaImage};
use region_sampler::geometry::{SampleRect, flipped_extent};
use region_sampler::stats::{HistogramConfig, channel_histogram, mean_color, render_histogram};

/// 64x64, left half pure red, right half pure blue.
fn split_image() -> RgbaImage {
    let mut img = RgbaImage::new(64, 64);
    for y in 0..64 {
        for x in 0..64 {
            let px = if x < 32 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 255])
            };
            img.put_pixel(x, y, px);
        }
    }
    img
}

#[test]
fn mean_color_over_one_half_is_that_half() {
    let img = split_image();
    // Display rect covering the left half, flipped the way the app does it.
    let extent = flipped_extent(SampleRect::new(0.0, 0.0, 32.0, 64.0), 64.0);
    let sample = mean_color(&img, extent);
    assert!((sample.red - 1.0).abs() < 1e-6);
    assert!(sample.green.abs() < 1e-6);
    assert!(sample.blue.abs() < 1e-6);
}

#[test]
fn mean_color_over_both_halves_mixes_evenly() {
    let img = split_image();
    let extent = flipped_extent(SampleRect::new(0.0, 0.0, 64.0, 64.0), 64.0);
    let sample = mean_color(&img, extent);
    assert!((sample.red - 0.5).abs() < 1e-3);
    assert!(sample.green.abs() < 1e-6);
    assert!((sample.blue - 0.5).abs() < 1e-3);
}

#[test]
fn negative_extent_samples_the_same_pixels() {
    let img = split_image();
    // Same region described forwards and inside-out.
    let forward = flipped_extent(SampleRect::new(8.0, 8.0, 20.0, 20.0), 64.0);
    let inverted = flipped_extent(SampleRect::new(28.0, 28.0, -20.0, -20.0), 64.0);
    assert_eq!(mean_color(&img, forward), mean_color(&img, inverted));
}

#[test]
fn histogram_of_split_image_lands_in_the_end_buckets() {
    let img = split_image();
    let config = HistogramConfig::default();
    let extent = flipped_extent(SampleRect::new(0.0, 0.0, 64.0, 64.0), 64.0);
    let histogram = channel_histogram(&img, extent, &config);

    assert_eq!(histogram.total, 64 * 64);
    // Red channel: half the pixels at 255, half at 0.
    assert_eq!(histogram.red[0], 64 * 32);
    assert_eq!(histogram.red[config.bucket_count - 1], 64 * 32);
    assert!(histogram.red[1..config.bucket_count - 1].iter().all(|&c| c == 0));
    // Green channel is all zeros -> all mass in bucket 0.
    assert_eq!(histogram.green[0], 64 * 64);
}

#[test]
fn histogram_image_has_configured_dimensions() {
    let img = split_image();
    let config = HistogramConfig {
        scale: 15.0,
        bucket_count: 100,
        display_height: 100,
    };
    let extent = flipped_extent(SampleRect::new(0.0, 0.0, 64.0, 64.0), 64.0);
    let histogram = channel_histogram(&img, extent, &config);
    let rendered = render_histogram(&histogram, &config).expect("render failed");
    assert_eq!(rendered.width(), 100);
    assert_eq!(rendered.height(), 100);
    // The end buckets carry half the mass each; their columns must differ
    // from the background.
    let background = *rendered.get_pixel(50, 0);
    let left_column = *rendered.get_pixel(0, 99);
    assert_ne!(background, left_column);
}

#[test]
fn degenerate_extent_yields_black_sample_and_empty_histogram() {
    let img = split_image();
    let config = HistogramConfig::default();
    // Entirely off-image after clamping.
    let extent = flipped_extent(SampleRect::new(200.0, 200.0, 10.0, 10.0), 64.0);

    let sample = mean_color(&img, extent);
    assert_eq!(sample.red, 0.0);
    assert_eq!(sample.green, 0.0);
    assert_eq!(sample.blue, 0.0);

    let histogram = channel_histogram(&img, extent, &config);
    assert_eq!(histogram.total, 0);
}
