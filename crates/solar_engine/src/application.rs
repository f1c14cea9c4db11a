//! Application trait and lifecycle management

use crate::foundation::time::FrameInfo;
use crate::render::window::{WindowBackend, WindowContext, WindowEvent};
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to draw into the window. Every method has a default,
/// so an empty implementation yields a window cleared to the configured color.
pub trait Application<B: WindowBackend> {
    /// Initialize the application
    ///
    /// Called once after the window is ready, before the first frame.
    fn initialize(&mut self, _window: &mut WindowContext<B>) -> Result<(), AppError> {
        Ok(())
    }

    /// Render one frame
    ///
    /// Called every frame before the buffers are swapped. The default clears
    /// the framebuffer to the configured clear color.
    fn render(&mut self, window: &mut WindowContext<B>, _frame: &FrameInfo) -> Result<(), AppError> {
        window.clear_default();
        Ok(())
    }

    /// Handle a window event
    ///
    /// Called for every event received while polling. Close requests have
    /// already raised the window's close flag when this runs.
    fn handle_event(&mut self, _window: &mut WindowContext<B>, _event: WindowEvent) -> Result<(), AppError> {
        Ok(())
    }

    /// Cleanup the application
    ///
    /// Called once when the loop ends, including when it ends with an error.
    fn cleanup(&mut self, _window: &mut WindowContext<B>) {}
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Custom application error
    #[error("Application error: {0}")]
    Custom(String),

    /// Rendering error
    #[error("Render error: {0}")]
    Render(String),
}
