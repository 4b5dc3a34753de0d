pub mod area_average;
pub mod histogram;
pub mod region;

pub use area_average::mean_color;
pub use histogram::{channel_histogram, render_histogram, ChannelHistogram};
pub use region::PixelRegion;

/// Mean color over a sample region, each channel normalized to [0,1].
///
/// Ephemeral: recomputed on every update, overwritten by the next one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColorSample {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

/// Typed histogram options, one field per recognized knob.
#[derive(Debug, Clone, Copy)]
pub struct HistogramConfig {
    /// Multiplier applied to each bucket's normalized frequency before the
    /// bar height is computed.
    pub scale: f32,
    pub bucket_count: usize,
    /// Height in pixels of the rendered histogram image.
    pub display_height: u32,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            scale: 15.0,
            bucket_count: 100,
            display_height: 100,
        }
    }
}
