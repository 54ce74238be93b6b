//! Application messages

use std::path::PathBuf;

use iced::time::Instant;
use iced::window;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Window ============
    /// Main window finished opening (the view has appeared)
    WindowOpened(window::Id),
    /// A window was closed
    WindowClosed(window::Id),

    // ============ Animation ============
    /// Frame tick (vsync rate while rings are rotating)
    AnimationTick(Instant),

    // ============ Settings ============
    /// Default settings written on first launch (`None` if nothing was written)
    SettingsPersisted(Result<Option<PathBuf>, String>),
}
