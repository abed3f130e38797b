//! Headless Text Box Demo
//!
//! Drives a text box with a scripted batch of input events and writes the
//! resulting frame to a PNG image.
//!
//! Run with: cargo run -p textbox_widgets --example headless_demo -- <font.ttf> [out.png]

use textbox_core::{
    Color, Image, InputEvent, Key, MemoryClipboard, Modifiers, MouseButton, Point,
    Result, TextBoxError,
};
use textbox_text::FontRenderer;
use textbox_widgets::{TextBox, TextBoxStyle};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let font_path = args
        .next()
        .ok_or_else(|| TextBoxError::Config("usage: headless_demo <font.ttf> [out.png]".into()))?;
    let out_path = args.next().unwrap_or_else(|| "textbox.png".to_string());

    let renderer = FontRenderer::from_file(&font_path, 20.0)?;
    let style = TextBoxStyle::new().with_margin(4);
    let mut text_box = TextBox::with_style(
        Point::new(20.0, 20.0),
        280.0,
        1,
        renderer,
        MemoryClipboard::new(),
        style,
    )?;
    text_box.set_action(|text| tracing::info!(%text, "submitted"));

    let mut events = vec![InputEvent::mouse_up(MouseButton::Left, 30.0, 30.0)];
    events.extend("Hello, world".chars().map(InputEvent::char));
    events.push(InputEvent::key_down(Key::Enter, Modifiers::NONE, None));
    events.extend((0..5).map(|_| InputEvent::key_down(Key::Left, Modifiers::NONE, None)));
    text_box.update(&events)?;

    let mut window = Image::filled(320, 80, Color::WHITE);
    text_box.draw_to(&mut window)?;
    window.save(&out_path)?;
    tracing::info!(path = %out_path, "wrote frame");
    Ok(())
}
