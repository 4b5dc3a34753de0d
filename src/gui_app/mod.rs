pub mod iced_ui;

pub use iced_ui::run_iced_app;
