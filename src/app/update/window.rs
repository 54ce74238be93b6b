//! Window lifecycle handlers

use iced::Task;
use iced::time::Instant;

use crate::app::{App, Message};

impl App {
    /// Handle window lifecycle messages
    pub(super) fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowOpened(id) => {
                tracing::info!("Main window opened with id: {:?}", id);
                self.window = Some(*id);
                self.start_rotation(Instant::now());
                Some(Task::none())
            }

            Message::WindowClosed(id) => {
                let cycles = self.layers.first().map_or(0, |l| l.engine.cycles());
                tracing::info!("Window {:?} closed after {} full cycle(s)", id, cycles);
                if self.window == Some(*id) {
                    self.window = None;
                    return Some(iced::exit());
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// The view has appeared: start every ring at the same instant
    pub fn start_rotation(&mut self, now: Instant) {
        for layer in &mut self.layers {
            layer.engine.appear(now);
        }
        tracing::info!("Started rotation for {} ring(s)", self.layers.len());
    }
}
