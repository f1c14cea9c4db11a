//! Window management using GLFW
//!
//! Provides window creation, OpenGL context binding and event handling.

use glfw::Context;

use crate::core::config::{ClearColor, ContextConfig, GlProfile, WindowConfig};
use crate::render::window::{WindowBackend, WindowError, WindowEvent, WindowResult, WindowSurface};

/// Entry points that must resolve for the context to be usable
const REQUIRED_FUNCTIONS: &[(&str, fn() -> bool)] = &[
    ("glClearColor", gl::ClearColor::is_loaded),
    ("glClear", gl::Clear::is_loaded),
    ("glViewport", gl::Viewport::is_loaded),
    ("glGetString", gl::GetString::is_loaded),
];

fn log_glfw_error(error: glfw::Error, description: String) {
    log::error!("GLFW error {error:?}: {description}");
}

const fn profile_hint(profile: GlProfile) -> glfw::OpenGlProfileHint {
    match profile {
        GlProfile::Core => glfw::OpenGlProfileHint::Core,
        GlProfile::Compat => glfw::OpenGlProfileHint::Compat,
        GlProfile::Any => glfw::OpenGlProfileHint::Any,
    }
}

#[allow(clippy::cast_sign_loss)]
fn to_extent((width, height): (i32, i32)) -> (u32, u32) {
    (width.max(0) as u32, height.max(0) as u32)
}

/// GLFW library handle
///
/// GLFW terminates once this and every window created from it are dropped.
pub struct GlfwBackend {
    glfw: glfw::Glfw,
}

impl WindowBackend for GlfwBackend {
    type Surface = GlfwSurface;

    fn init(context: &ContextConfig) -> WindowResult<Self> {
        let mut glfw = glfw::init(log_glfw_error)
            .map_err(|e| WindowError::InitializationFailed(format!("{e:?}")))?;

        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::OpenGl));
        glfw.window_hint(glfw::WindowHint::ContextVersion(context.major, context.minor));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(profile_hint(context.profile)));
        if context.forward_compat {
            glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
        }

        Ok(Self { glfw })
    }

    fn create_surface(&mut self, config: &WindowConfig) -> WindowResult<GlfwSurface> {
        self.glfw.window_hint(glfw::WindowHint::Resizable(config.resizable));

        let (mut window, events) = self
            .glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        // Set up event polling
        window.set_close_polling(true);
        window.set_size_polling(true);
        window.set_framebuffer_size_polling(true);
        window.set_focus_polling(true);
        window.set_iconify_polling(true);

        Ok(GlfwSurface { window, events })
    }

    fn set_vsync(&mut self, enabled: bool) {
        let interval = if enabled {
            glfw::SwapInterval::Sync(1)
        } else {
            glfw::SwapInterval::None
        };
        self.glfw.set_swap_interval(interval);
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
    }
}

/// GLFW window with an OpenGL context
pub struct GlfwSurface {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl WindowSurface for GlfwSurface {
    fn make_current(&mut self) {
        self.window.make_current();
    }

    fn load_functions(&mut self) -> WindowResult<()> {
        gl::load_with(|symbol| self.window.get_proc_address(symbol) as *const _);

        let missing: Vec<&str> = REQUIRED_FUNCTIONS
            .iter()
            .filter(|(_, is_loaded)| !is_loaded())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(WindowError::FunctionLoadingFailed(missing.join(", ")));
        }

        log::debug!("OpenGL functions loaded");
        Ok(())
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    #[allow(unsafe_code)]
    fn clear(&mut self, color: ClearColor) {
        // SAFETY: the context is current and both entry points were checked in `load_functions`.
        unsafe {
            gl::ClearColor(color.r, color.g, color.b, color.a);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    fn size(&self) -> (u32, u32) {
        to_extent(self.window.get_size())
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        to_extent(self.window.get_framebuffer_size())
    }

    fn drain_events(&mut self) -> Vec<WindowEvent> {
        glfw::flush_messages(&self.events)
            .filter_map(|(_, event)| match event {
                glfw::WindowEvent::Close => Some(WindowEvent::CloseRequested),
                glfw::WindowEvent::Size(w, h) => {
                    let (width, height) = to_extent((w, h));
                    Some(WindowEvent::Resized { width, height })
                }
                glfw::WindowEvent::FramebufferSize(w, h) => {
                    let (width, height) = to_extent((w, h));
                    set_viewport(width, height);
                    Some(WindowEvent::FramebufferResized { width, height })
                }
                glfw::WindowEvent::Focus(focused) => Some(WindowEvent::Focused(focused)),
                glfw::WindowEvent::Iconify(iconified) => Some(WindowEvent::Iconified(iconified)),
                other => {
                    log::trace!("Ignoring window event {other:?}");
                    None
                }
            })
            .collect()
    }
}

/// Resize the OpenGL viewport to cover the whole framebuffer
#[allow(unsafe_code, clippy::cast_possible_wrap)]
fn set_viewport(width: u32, height: u32) {
    // SAFETY: only called with a current context whose functions were loaded.
    unsafe {
        gl::Viewport(0, 0, width as i32, height as i32);
    }
}
