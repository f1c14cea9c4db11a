//! Render loop

use crate::{
    application::Application,
    core::config::{ApplicationConfig, EngineConfig},
    foundation::time::Timer,
    render::opengl::GlfwBackend,
    render::window::{WindowBackend, WindowContext, WindowError},
};
use thiserror::Error;

/// Summary of a finished run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunStats {
    /// Number of frames presented
    pub frames: u64,
    /// Seconds spent in the loop
    pub total_time: f32,
    /// Average frames per second
    pub average_fps: f32,
}

/// Main engine struct
///
/// Owns the window and drives the render loop until the window is asked to close.
pub struct Engine<B: WindowBackend = GlfwBackend> {
    window: WindowContext<B>,
    timer: Timer,
    config: EngineConfig,
}

impl<B: WindowBackend> Engine<B> {
    /// Create the window described by `config`
    pub fn new(config: &ApplicationConfig) -> Result<Self, EngineError> {
        log::info!("Initializing engine...");
        let window = WindowContext::new(config.window.clone())?;
        Ok(Self::with_window(window, config.engine.clone()))
    }

    /// Drive an existing window
    pub fn with_window(window: WindowContext<B>, config: EngineConfig) -> Self {
        Self {
            window,
            timer: Timer::new(),
            config,
        }
    }

    /// Run the main loop with the given application
    ///
    /// Each frame renders, presents the back buffer, then polls events. The
    /// close flag is checked before every frame.
    pub fn run<A: Application<B>>(&mut self, app: &mut A) -> Result<RunStats, EngineError> {
        app.initialize(&mut self.window)
            .map_err(|e| EngineError::ApplicationError(format!("App initialization: {e}")))?;

        log::info!("Starting main loop...");
        let result = self.run_loop(app);
        app.cleanup(&mut self.window);
        result?;

        let stats = RunStats {
            frames: self.timer.frame_count(),
            total_time: self.timer.total_time(),
            average_fps: self.timer.average_fps(),
        };
        log::info!(
            "Main loop finished after {} frames ({:.1} fps average)",
            stats.frames,
            stats.average_fps
        );
        Ok(stats)
    }

    fn run_loop<A: Application<B>>(&mut self, app: &mut A) -> Result<(), EngineError> {
        while !self.window.should_close() {
            if self.frame_limit_reached() {
                log::info!("Frame limit reached");
                self.window.request_close();
                break;
            }

            let frame = self.timer.tick();

            app.render(&mut self.window, &frame)
                .map_err(|e| EngineError::ApplicationError(format!("App render: {e}")))?;

            self.window.swap_buffers();

            for event in self.window.poll_events() {
                log::trace!("Window event: {event:?}");
                app.handle_event(&mut self.window, event)
                    .map_err(|e| EngineError::ApplicationError(format!("App event: {e}")))?;
            }
        }
        Ok(())
    }

    fn frame_limit_reached(&self) -> bool {
        self.config.frame_limit.is_some_and(|limit| self.timer.frame_count() >= limit)
    }

    /// Get the window
    pub fn window(&self) -> &WindowContext<B> {
        &self.window
    }

    /// Get mutable access to the window
    pub fn window_mut(&mut self) -> &mut WindowContext<B> {
        &mut self.window
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.window.request_close();
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Window or context setup failed
    #[error("Engine initialization failed: {0}")]
    Window(#[from] WindowError),

    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),
}
