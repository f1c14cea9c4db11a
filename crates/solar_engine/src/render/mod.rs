//! # Rendering System
//!
//! Window and graphics context management. The window/context manager lives in
//! [`window`] and is generic over a backend; [`opengl`] provides the GLFW
//! implementation used by applications.

pub mod window;
pub mod opengl;

pub use window::{GlWindow, LifecycleState, WindowContext, WindowError, WindowEvent, WindowResult};
