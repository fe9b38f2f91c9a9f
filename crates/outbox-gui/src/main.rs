//! Outbox - Desktop mail compose application.
//!
//! Presents a welcome screen and a compose-email form behind a shared
//! navigation shell, then delegates sending to the platform's default mail
//! client.

use iced::window;
use iced::Size;

use outbox_gui::app::App;

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Outbox");

    // Run the Iced application using the builder pattern
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window::Settings {
            size: Size::new(520.0, 680.0),
            min_size: Some(Size::new(420.0, 520.0)),
            ..Default::default()
        })
        .run()
}
