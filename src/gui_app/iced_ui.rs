use iced::mouse::Cursor;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Program, Stroke, event};
use iced::widget::{button, column, container, progress_bar, row, stack, text};
use iced::{Color, Element, Length, Point, Rectangle, Size, Task, Theme, mouse, window};
use image::RgbaImage;
use std::path::PathBuf;
use thiserror::Error;

use crate::geometry::{RectangleEditor, SampleRect, aspect_fit, flipped_extent};
use crate::stats::{ColorSample, HistogramConfig, channel_histogram, mean_color, render_histogram};

/// Generated at startup by the GUI bin when no photo has been opened yet.
pub const DEFAULT_PHOTO_PATH: &str = "sample_photo.png";

const VIEWPORT_BACKGROUND: Color = Color::from_rgb(24.0 / 255.0, 24.0 / 255.0, 24.0 / 255.0);

pub fn run_iced_app() -> iced::Result {
    iced::application("Region Sampler", SamplerApp::update, SamplerApp::view)
        .theme(SamplerApp::theme)
        .antialiasing(true)
        .window(window::Settings {
            size: Size::new(680.0, 820.0),
            ..Default::default()
        })
        .run_with(SamplerApp::new)
}

struct SamplerApp {
    photo: Option<Photo>,
    editor: RectangleEditor,
    histogram_config: HistogramConfig,
    swatch: ColorSample,
    histogram_handle: Option<iced::widget::image::Handle>,
    status_text: String,
    is_loading: bool,
    image_cache: canvas::Cache,
}

struct Photo {
    handle: iced::widget::image::Handle,
    pixels: RgbaImage,
    size: Size,
}

#[derive(Debug, Clone)]
enum Message {
    OpenImagePressed,
    FilePicked(Option<PathBuf>),
    PhotoLoaded(Result<LoadedPhoto, PhotoLoadError>),
    /// A single-point press or drag on the viewer, in viewport coordinates.
    PointerSample { position: Point, bounds: Size },
}

#[derive(Debug, Clone)]
struct LoadedPhoto {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    path: PathBuf,
}

#[derive(Debug, Clone, Error)]
enum PhotoLoadError {
    #[error("could not decode image: {0}")]
    Decode(String),
    #[error("image task failed: {0}")]
    TaskJoin(String),
}

impl SamplerApp {
    fn new() -> (Self, Task<Message>) {
        let app = SamplerApp {
            photo: None,
            editor: RectangleEditor::default(),
            histogram_config: HistogramConfig::default(),
            swatch: ColorSample::default(),
            histogram_handle: None,
            status_text: "Loading sample photograph...".to_string(),
            is_loading: true,
            image_cache: canvas::Cache::default(),
        };

        let startup = Task::perform(
            load_photo_task(PathBuf::from(DEFAULT_PHOTO_PATH)),
            Message::PhotoLoaded,
        );

        (app, startup)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenImagePressed => {
                if self.is_loading {
                    return Task::none();
                }

                let dialog = rfd::AsyncFileDialog::new()
                    .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "tiff"])
                    .pick_file();

                Task::perform(dialog, |result| {
                    Message::FilePicked(result.map(|file| file.path().to_path_buf()))
                })
            }
            Message::FilePicked(Some(path)) => {
                self.is_loading = true;
                Task::perform(load_photo_task(path), Message::PhotoLoaded)
            }
            Message::FilePicked(None) => Task::none(),
            Message::PhotoLoaded(Ok(photo)) => {
                let LoadedPhoto {
                    width,
                    height,
                    pixels,
                    path,
                } = photo;

                let handle =
                    iced::widget::image::Handle::from_rgba(width, height, pixels.clone());
                match RgbaImage::from_raw(width, height, pixels) {
                    Some(buffer) => {
                        self.photo = Some(Photo {
                            handle,
                            pixels: buffer,
                            size: Size::new(width as f32, height as f32),
                        });
                        self.status_text = format!("Loaded {}", path.display());
                        self.editor = RectangleEditor::default();
                        self.image_cache.clear();
                        self.refresh_sample();
                    }
                    None => {
                        self.status_text = "Image buffer had mismatched dimensions".to_string();
                    }
                }
                self.is_loading = false;
                Task::none()
            }
            Message::PhotoLoaded(Err(error)) => {
                self.status_text = format!("Failed to load image: {error}");
                self.is_loading = false;
                Task::none()
            }
            Message::PointerSample { position, bounds } => {
                self.handle_pointer(position, bounds);
                Task::none()
            }
        }
    }

    /// One full update cycle for one pointer event: hit-test, drag, then the
    /// synchronous refresh. Runs to completion before the next event.
    fn handle_pointer(&mut self, position: Point, bounds: Size) {
        let Some(pointer) = self.pointer_in_photo(position, bounds) else {
            return;
        };

        // Hit-tested fresh on every event; an out-of-radius pointer is a
        // normal no-op, not an error.
        let Some(corner) = self.editor.nearest_corner(pointer) else {
            return;
        };

        self.editor.apply_drag(corner, pointer);
        self.refresh_sample();
    }

    /// Maps a viewport position into photo display coordinates through the
    /// aspect-fit rect the image layer draws with.
    fn pointer_in_photo(&self, position: Point, bounds: Size) -> Option<(f32, f32)> {
        let photo = self.photo.as_ref()?;
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return None;
        }

        let fitted = photo_fit_rect(photo.size, bounds);
        let scale = fitted.width / photo.size.width;
        if scale <= 0.0 {
            return None;
        }

        Some((
            (position.x - fitted.x) / scale,
            (position.y - fitted.y) / scale,
        ))
    }

    /// Recomputes everything derived from the sample rectangle: the flipped
    /// sample extent, the mean color, and the rendered histogram.
    fn refresh_sample(&mut self) {
        let Some(photo) = self.photo.as_ref() else {
            return;
        };

        let extent = flipped_extent(self.editor.rect, photo.size.height);

        self.swatch = mean_color(&photo.pixels, extent);

        let histogram = channel_histogram(&photo.pixels, extent, &self.histogram_config);
        match render_histogram(&histogram, &self.histogram_config) {
            Ok(rendered) => {
                self.histogram_handle = Some(iced::widget::image::Handle::from_rgba(
                    rendered.width(),
                    rendered.height(),
                    rendered.into_raw(),
                ));
            }
            Err(error) => {
                self.status_text = format!("Histogram render failed: {error}");
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        column![
            self.toolbar_section(),
            self.viewer_section(),
            self.sample_section(),
        ]
        .spacing(10)
        .padding(10)
        .into()
    }

    fn toolbar_section(&self) -> Element<'_, Message> {
        let open_button: Element<'_, Message> = if self.is_loading {
            button(text("Loading...")).into()
        } else {
            button(text("Open Image"))
                .on_press(Message::OpenImagePressed)
                .into()
        };

        let status_label: Element<'_, Message> = text(&self.status_text).size(12).into();

        row![open_button, status_label]
            .spacing(16)
            .align_y(iced::Alignment::Center)
            .into()
    }

    fn viewer_section(&self) -> Element<'_, Message> {
        // Image below, sample-rect overlay above; both layers share the
        // same aspect-fit geometry.
        let image_canvas = Canvas::new(ImageLayer(self))
            .width(Length::Fill)
            .height(Length::Fill);

        let overlay_canvas = Canvas::new(OverlayLayer(self))
            .width(Length::Fill)
            .height(Length::Fill);

        let stacked = stack![
            container(image_canvas)
                .width(Length::Fill)
                .height(Length::Fill)
                .clip(true),
            overlay_canvas
        ];

        container(stacked)
            .width(Length::Fill)
            .height(Length::Fill)
            .clip(true)
            .style(|_| container::Style {
                background: Some(VIEWPORT_BACKGROUND.into()),
                ..Default::default()
            })
            .into()
    }

    /// Histogram, average-color swatch, and the three channel bars.
    fn sample_section(&self) -> Element<'_, Message> {
        let histogram: Element<'_, Message> = match &self.histogram_handle {
            Some(handle) => container(
                iced::widget::image(handle.clone()).content_fit(iced::ContentFit::Contain),
            )
            .width(Length::Fixed(100.0))
            .height(Length::Fill)
            .into(),
            None => container(text("--").size(12))
                .width(Length::Fixed(100.0))
                .height(Length::Fill)
                .into(),
        };

        let swatch_color = Color::from_rgb(self.swatch.red, self.swatch.green, self.swatch.blue);
        let swatch = container(
            text(swatch_hex(self.swatch))
                .size(12)
                .color(swatch_label_color(self.swatch)),
        )
        .center_x(Length::Fixed(100.0))
        .center_y(Length::Fill)
        .style(move |_| container::Style {
            background: Some(swatch_color.into()),
            border: iced::border::Border {
                color: Color::from_rgb8(70, 70, 70),
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        });

        let bars = column![
            channel_bar(self.swatch.red, Color::from_rgb8(220, 60, 60)),
            channel_bar(self.swatch.green, Color::from_rgb8(60, 200, 90)),
            channel_bar(self.swatch.blue, Color::from_rgb8(80, 110, 230)),
        ]
        .spacing(10)
        .width(Length::Fill);

        row![histogram, swatch, bars]
            .spacing(10)
            .height(Length::Fixed(100.0))
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn channel_bar(value: f32, tint: Color) -> Element<'static, Message> {
    progress_bar(0.0..=1.0, value)
        .style(move |_: &Theme| progress_bar::Style {
            background: Color::from_rgb8(40, 40, 40).into(),
            bar: tint.into(),
            border: iced::border::Border {
                color: Color::from_rgb8(70, 70, 70),
                width: 1.0,
                radius: 4.0.into(),
            },
        })
        .into()
}

fn swatch_hex(sample: ColorSample) -> String {
    let srgb: palette::Srgb<u8> =
        palette::Srgb::new(sample.red, sample.green, sample.blue).into_format();
    format!("#{:02X}{:02X}{:02X}", srgb.red, srgb.green, srgb.blue)
}

/// Readable label color on top of the swatch, by relative luminance.
fn swatch_label_color(sample: ColorSample) -> Color {
    let luminance = 0.2126 * sample.red + 0.7152 * sample.green + 0.0722 * sample.blue;
    if luminance > 0.5 { Color::BLACK } else { Color::WHITE }
}

/// Aspect-fit placement of the photo inside the viewport, shared by both
/// canvas layers and the pointer mapping.
fn photo_fit_rect(photo_size: Size, viewport: Size) -> SampleRect {
    aspect_fit(
        SampleRect::new(0.0, 0.0, photo_size.width, photo_size.height),
        SampleRect::new(0.0, 0.0, viewport.width, viewport.height),
    )
}

#[derive(Default)]
struct DragState {
    dragging: bool,
}

// Bottom layer: the photo, aspect-fit, over the background fill.
struct ImageLayer<'a>(&'a SamplerApp);

impl<'a> Program<Message> for ImageLayer<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<Geometry> {
        let app = self.0;
        let image_layer = app.image_cache.draw(renderer, bounds.size(), |frame| {
            frame.fill_rectangle(Point::ORIGIN, bounds.size(), VIEWPORT_BACKGROUND);

            if let Some(photo) = &app.photo {
                let fitted = photo_fit_rect(photo.size, bounds.size());
                let dest_rect = Rectangle::new(
                    Point::new(fitted.x, fitted.y),
                    Size::new(fitted.width, fitted.height),
                );
                frame.draw_image(dest_rect, canvas::Image::new(photo.handle.clone()));
            } else {
                frame.fill_text(canvas::Text {
                    content: "No image loaded".to_string(),
                    position: Point::new(bounds.width / 2.0 - 70.0, bounds.height / 2.0),
                    color: Color::from_rgb8(200, 200, 200),
                    ..Default::default()
                });
            }
        });

        vec![image_layer]
    }
}

// Top layer: sample rectangle plus corner handles; owns pointer events.
struct OverlayLayer<'a>(&'a SamplerApp);

impl<'a> OverlayLayer<'a> {
    const RECT_STROKE_WIDTH: f32 = 4.0;
    const HANDLE_RADIUS: f32 = 4.0;

    fn draw_sample_rect(&self, frame: &mut Frame, bounds: Rectangle) {
        let app = self.0;
        let Some(photo) = &app.photo else {
            return;
        };

        let fitted = photo_fit_rect(photo.size, bounds.size());
        let scale = fitted.width / photo.size.width;

        let rect = app.editor.rect;
        // Normalized at the drawing seam only; the editor's rect itself may
        // carry negative extents mid-drag.
        let top_left = Point::new(
            fitted.x + rect.min_x() * scale,
            fitted.y + rect.min_y() * scale,
        );
        let size = Size::new(
            (rect.max_x() - rect.min_x()) * scale,
            (rect.max_y() - rect.min_y()) * scale,
        );

        frame.stroke_rectangle(
            top_left,
            size,
            Stroke::default()
                .with_width(Self::RECT_STROKE_WIDTH)
                .with_color(Color::BLACK),
        );

        for (cx, cy) in rect.corner_positions() {
            let center = Point::new(fitted.x + cx * scale, fitted.y + cy * scale);
            let handle = canvas::Path::circle(center, Self::HANDLE_RADIUS);
            frame.fill(&handle, Color::WHITE);
            frame.stroke(
                &handle,
                Stroke::default().with_width(1.0).with_color(Color::BLACK),
            );
        }
    }
}

impl<'a> Program<Message> for OverlayLayer<'a> {
    type State = DragState;

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        self.draw_sample_rect(&mut frame, bounds);
        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (event::Status, Option<Message>) {
        match event {
            canvas::Event::Mouse(mouse_event) => match mouse_event {
                mouse::Event::ButtonPressed(mouse::Button::Left) => {
                    if let Some(position) = cursor.position_in(bounds) {
                        state.dragging = true;
                        (
                            event::Status::Captured,
                            Some(Message::PointerSample {
                                position,
                                bounds: bounds.size(),
                            }),
                        )
                    } else {
                        (event::Status::Ignored, None)
                    }
                }
                mouse::Event::ButtonReleased(mouse::Button::Left) => {
                    state.dragging = false;
                    (event::Status::Captured, None)
                }
                mouse::Event::CursorMoved { .. } => {
                    if state.dragging {
                        if let Some(position) = cursor.position_in(bounds) {
                            return (
                                event::Status::Captured,
                                Some(Message::PointerSample {
                                    position,
                                    bounds: bounds.size(),
                                }),
                            );
                        }
                    }
                    (event::Status::Ignored, None)
                }
                mouse::Event::CursorLeft => {
                    state.dragging = false;
                    (event::Status::Captured, None)
                }
                _ => (event::Status::Ignored, None),
            },
            _ => (event::Status::Ignored, None),
        }
    }
}

async fn load_photo_task(path: PathBuf) -> Result<LoadedPhoto, PhotoLoadError> {
    tokio::task::spawn_blocking(move || {
        let image = image::open(&path).map_err(|err| PhotoLoadError::Decode(err.to_string()))?;
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(LoadedPhoto {
            width,
            height,
            pixels: rgba.into_raw(),
            path,
        })
    })
    .await
    .map_err(|err| PhotoLoadError::TaskJoin(err.to_string()))?
}
