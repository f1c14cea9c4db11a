//! Window/context manager
//!
//! [`WindowContext`] owns the windowing library, one window and that window's
//! graphics context. Setup runs as a sequence of fallible steps:
//!
//! ```text
//! validate config -> init library -> create window -> make current -> load functions -> Ready
//! ```
//!
//! A failing step returns its [`WindowError`]; whatever earlier steps acquired
//! is released by drop, window first, library last. A value of this type
//! therefore only exists once every step succeeded.

use crate::core::config::{ClearColor, WindowConfig};
use crate::render::opengl::GlfwBackend;
use super::backend::{WindowBackend, WindowEvent, WindowSurface};
use super::error::{WindowError, WindowResult};

/// Coarse lifecycle of a live window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Setup finished and the close flag is clear
    Ready,
    /// The close flag has been raised
    Closing,
}

/// Window and graphics context with scoped ownership
///
/// Not `Send`: the context is bound to the thread that created it.
pub struct WindowContext<B: WindowBackend = GlfwBackend> {
    // Field order is drop order: the window must go before the library.
    surface: B::Surface,
    backend: B,
    config: WindowConfig,
}

/// Window backed by GLFW with an OpenGL context
pub type GlWindow = WindowContext<GlfwBackend>;

impl<B: WindowBackend> WindowContext<B> {
    /// Run the full setup sequence
    ///
    /// Every failure is logged at error level before it is returned.
    pub fn new(config: WindowConfig) -> WindowResult<Self> {
        config
            .validate()
            .map_err(|reason| report(WindowError::InvalidConfig(reason)))?;

        let backend = B::init(&config.context).map_err(report)?;
        log::debug!(
            "Windowing library initialized, requesting OpenGL {}.{} {:?}",
            config.context.major,
            config.context.minor,
            config.context.profile
        );

        Self::finish_setup(backend, config)
    }

    fn finish_setup(mut backend: B, config: WindowConfig) -> WindowResult<Self> {
        let mut surface = backend.create_surface(&config).map_err(report)?;
        surface.make_current();
        surface.load_functions().map_err(report)?;
        backend.set_vsync(config.vsync);

        log::info!("Created window '{}' ({}x{})", config.title, config.width, config.height);

        Ok(Self {
            surface,
            backend,
            config,
        })
    }

    /// Whether setup fully succeeded
    ///
    /// Always true: a failed setup never produces a `WindowContext`. Kept so
    /// callers holding a context can state the check explicitly.
    #[allow(clippy::unused_self)]
    pub fn is_valid(&self) -> bool {
        true
    }

    /// Whether the window has been asked to close
    pub fn should_close(&self) -> bool {
        self.surface.should_close()
    }

    /// Raise the close flag so the render loop ends after the current frame
    pub fn request_close(&mut self) {
        log::debug!("Close requested for window '{}'", self.config.title);
        self.surface.set_should_close(true);
    }

    /// Current lifecycle state
    pub fn state(&self) -> LifecycleState {
        if self.should_close() {
            LifecycleState::Closing
        } else {
            LifecycleState::Ready
        }
    }

    /// Present the back buffer; call once per frame after drawing
    pub fn swap_buffers(&mut self) {
        self.surface.swap_buffers();
    }

    /// Process pending window system events and return them
    pub fn poll_events(&mut self) -> Vec<WindowEvent> {
        self.backend.poll_events();
        self.surface.drain_events()
    }

    /// Clear the color buffer to `color`
    pub fn clear(&mut self, color: ClearColor) {
        self.surface.clear(color.clamped());
    }

    /// Clear the color buffer to the configured clear color
    pub fn clear_default(&mut self) {
        self.clear(self.config.clear_color);
    }

    /// Client area size in screen coordinates
    pub fn size(&self) -> (u32, u32) {
        self.surface.size()
    }

    /// Framebuffer size in pixels
    pub fn framebuffer_size(&self) -> (u32, u32) {
        self.surface.framebuffer_size()
    }

    /// Configuration the window was created with
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }
}

impl<B: WindowBackend> Drop for WindowContext<B> {
    fn drop(&mut self) {
        log::debug!("Destroying window '{}'", self.config.title);
    }
}

fn report(error: WindowError) -> WindowError {
    log::error!("{error}");
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::window::mock::{self, Call, FailAt, MockBackend};

    type MockWindow = WindowContext<MockBackend>;

    #[test]
    fn test_library_init_failure_creates_no_window() {
        mock::reset(FailAt::Init);

        let result = MockWindow::new(WindowConfig::default());

        assert!(matches!(result, Err(WindowError::InitializationFailed(_))));
        assert_eq!(mock::calls(), vec![Call::Init]);
    }

    #[test]
    fn test_creation_failure_terminates_library_once() {
        mock::reset(FailAt::CreateWindow);

        let result = MockWindow::new(WindowConfig::default());

        assert!(matches!(result, Err(WindowError::CreationFailed)));
        assert_eq!(mock::calls(), vec![Call::Init, Call::CreateWindow, Call::Terminate]);
        assert_eq!(mock::count(Call::DestroyWindow), 0);
    }

    #[test]
    fn test_function_loading_failure_releases_window_then_library() {
        mock::reset(FailAt::LoadFunctions);

        let result = MockWindow::new(WindowConfig::default());

        assert!(matches!(result, Err(WindowError::FunctionLoadingFailed(_))));
        assert_eq!(
            mock::calls(),
            vec![
                Call::Init,
                Call::CreateWindow,
                Call::MakeCurrent,
                Call::LoadFunctions,
                Call::DestroyWindow,
                Call::Terminate,
            ]
        );
    }

    #[test]
    fn test_invalid_config_never_touches_library() {
        mock::reset(FailAt::Nothing);

        let result = MockWindow::new(WindowConfig::new("Solar", 0, 720));

        assert!(matches!(result, Err(WindowError::InvalidConfig(_))));
        assert!(mock::calls().is_empty());
    }

    #[test]
    fn test_successful_setup_is_valid_until_drop() {
        mock::reset(FailAt::Nothing);

        let window = MockWindow::new(WindowConfig::default()).unwrap();
        assert!(window.is_valid());
        assert_eq!(window.state(), LifecycleState::Ready);
        assert_eq!(window.size(), (1290, 720));
        assert_eq!(
            mock::calls(),
            vec![Call::Init, Call::CreateWindow, Call::MakeCurrent, Call::LoadFunctions, Call::SetVsync(true)]
        );

        drop(window);
        assert_eq!(mock::count(Call::DestroyWindow), 1);
        assert_eq!(mock::count(Call::Terminate), 1);
        let calls = mock::calls();
        assert_eq!(&calls[calls.len() - 2..], &[Call::DestroyWindow, Call::Terminate]);
    }

    #[test]
    fn test_fresh_window_should_not_close() {
        mock::reset(FailAt::Nothing);

        let mut window = MockWindow::new(WindowConfig::default()).unwrap();
        assert!(!window.should_close());
        assert!(window.poll_events().is_empty());
        assert!(!window.should_close());
    }

    #[test]
    fn test_request_close_enters_closing_state() {
        mock::reset(FailAt::Nothing);

        let mut window = MockWindow::new(WindowConfig::default()).unwrap();
        window.request_close();
        assert!(window.should_close());
        assert_eq!(window.state(), LifecycleState::Closing);
        assert!(window.is_valid());
    }

    #[test]
    fn test_close_event_is_reported_by_poll() {
        mock::reset(FailAt::Nothing);
        mock::close_after_polls(2);

        let mut window = MockWindow::new(WindowConfig::default()).unwrap();
        assert!(window.poll_events().is_empty());
        assert_eq!(window.poll_events(), vec![WindowEvent::CloseRequested]);
        assert!(window.should_close());
    }

    #[test]
    fn test_clear_uses_clamped_color() {
        mock::reset(FailAt::Nothing);
        let config = WindowConfig::default().with_clear_color(ClearColor::new(0.1, 0.2, 0.3, 1.0));

        let mut window = MockWindow::new(config).unwrap();
        window.clear_default();
        window.clear(ClearColor::new(2.0, 0.0, 0.0, 1.0));

        assert_eq!(mock::count(Call::Clear(ClearColor::new(0.1, 0.2, 0.3, 1.0))), 1);
        assert_eq!(mock::count(Call::Clear(ClearColor::new(1.0, 0.0, 0.0, 1.0))), 1);
    }
}
