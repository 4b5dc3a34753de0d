pub mod geometry;
pub mod gui_app;
pub mod stats;
pub mod test_image_gen;
