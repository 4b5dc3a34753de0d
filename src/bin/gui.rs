use region_sampler::gui_app;
use region_sampler::gui_app::iced_ui::DEFAULT_PHOTO_PATH;
use region_sampler::test_image_gen;

fn main() -> iced::Result {
    println!("Region Sampler - Starting GUI...");

    // Stand-in photograph for first launch; Open Image replaces it.
    if !std::path::Path::new(DEFAULT_PHOTO_PATH).exists() {
        println!("Generating sample photograph...");
        if let Err(e) = test_image_gen::generate_sample_photo(DEFAULT_PHOTO_PATH) {
            eprintln!("Warning: failed to generate sample photograph: {}", e);
        } else {
            println!("Sample photograph generated successfully.");
        }
    }

    gui_app::run_iced_app()
}
