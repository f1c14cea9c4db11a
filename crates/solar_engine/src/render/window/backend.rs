//! Backend-agnostic window management traits
//!
//! A backend is split in two halves that mirror the two native resources:
//! [`WindowBackend`] owns the windowing library itself, [`WindowSurface`] owns
//! one window and its graphics context. Dropping a surface destroys the
//! window; dropping the backend shuts the library down.

use crate::core::config::{ClearColor, ContextConfig, WindowConfig};
use super::error::WindowResult;

/// Window system events the render loop cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The user asked to close the window
    CloseRequested,
    /// The window's client area was resized
    Resized {
        /// New width in screen coordinates
        width: u32,
        /// New height in screen coordinates
        height: u32,
    },
    /// The framebuffer was resized
    FramebufferResized {
        /// New width in pixels
        width: u32,
        /// New height in pixels
        height: u32,
    },
    /// The window gained (`true`) or lost (`false`) input focus
    Focused(bool),
    /// The window was minimized (`true`) or restored (`false`)
    Iconified(bool),
}

/// Windowing library handle
///
/// Only one value of an implementing type should exist at a time; the native
/// libraries behind it keep process-wide state.
pub trait WindowBackend: Sized {
    /// Window type created by this backend
    type Surface: WindowSurface;

    /// Initialize the library and apply the context hints for the next window
    fn init(context: &ContextConfig) -> WindowResult<Self>;

    /// Create a window with the configured size and title
    fn create_surface(&mut self, config: &WindowConfig) -> WindowResult<Self::Surface>;

    /// Set the swap interval for the current context
    fn set_vsync(&mut self, enabled: bool);

    /// Process pending window system events
    fn poll_events(&mut self);
}

/// One window and its graphics context
pub trait WindowSurface {
    /// Bind this window's context to the calling thread
    fn make_current(&mut self);

    /// Resolve graphics API entry points through the window system
    ///
    /// The context must be current.
    fn load_functions(&mut self) -> WindowResult<()>;

    /// Whether the close flag is set
    fn should_close(&self) -> bool;

    /// Set or clear the close flag
    fn set_should_close(&mut self, should_close: bool);

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Clear the color buffer
    fn clear(&mut self, color: ClearColor);

    /// Client area size in screen coordinates
    fn size(&self) -> (u32, u32);

    /// Framebuffer size in pixels
    fn framebuffer_size(&self) -> (u32, u32);

    /// Take the events received since the last call
    fn drain_events(&mut self) -> Vec<WindowEvent>;
}
