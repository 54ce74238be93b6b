//! Frame tick handler

use iced::Task;

use crate::app::{App, Message};

impl App {
    /// Handle animation frame messages
    pub(super) fn handle_animation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AnimationTick(now) => {
                for layer in &mut self.layers {
                    layer.engine.tick(*now);
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
