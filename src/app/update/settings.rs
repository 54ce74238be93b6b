//! Settings persistence handlers

use iced::Task;

use crate::app::{App, Message};

impl App {
    /// Handle settings messages
    pub(super) fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SettingsPersisted(result) => {
                match result {
                    Ok(Some(path)) => tracing::info!("Wrote default settings to {:?}", path),
                    Ok(None) => tracing::debug!("Settings file already present"),
                    Err(e) => tracing::warn!("Failed to write default settings: {}", e),
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
