//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Size, Task, Theme};

pub use message::Message;
pub use state::App;

use crate::features::Settings;
use crate::ui::theme;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings
        let settings = Settings::load();

        // 2. Build the rings
        let app = Self::with_settings(settings.clone());

        // 3. Open main window; its completion is the "view appeared" signal
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: Size::new(
                settings.display.window_width,
                settings.display.window_height,
            ),
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        // 4. Initialize async tasks
        let init_task = Task::batch([
            open_window.map(Message::WindowOpened),
            Task::perform(persist(settings), Message::SettingsPersisted),
        ]);

        (app, init_task)
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        theme::for_mode(self.settings.display.dark_mode)
    }

    pub fn title(&self, _window_id: iced::window::Id) -> String {
        "Gyre".to_string()
    }

    /// Subscriptions for animation frames and window close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        // 1. Animation subscription (vsync rate while rotating)
        let animation_sub = if subscription_logic::needs_animation_subscription(
            self.window.is_some(),
            self.is_animating(),
        ) {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 2. Window events
        let close_event_sub = iced::window::close_events().map(Message::WindowClosed);

        iced::Subscription::batch([animation_sub, close_event_sub])
    }
}

async fn persist(settings: Settings) -> Result<Option<std::path::PathBuf>, String> {
    helpers::persist_default_settings(settings)
        .await
        .map_err(|e| format!("{:#}", e))
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// Frames are only needed while the window is up and a ring is turning
    pub fn needs_animation_subscription(window_open: bool, any_animating: bool) -> bool {
        window_open && any_animating
    }
}
