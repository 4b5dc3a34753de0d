pub mod aspect_fit;
pub mod extent;
pub mod sample_rect;

pub use aspect_fit::aspect_fit;
pub use extent::flipped_extent;
pub use sample_rect::{Corner, RectangleEditor, SampleRect};
