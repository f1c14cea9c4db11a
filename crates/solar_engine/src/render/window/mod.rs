//! Window management subsystem
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     Application Code            │
//! └─────────────┬───────────────────┘
//!               │ Uses
//!       ┌───────▼────────┐
//!       │ WindowContext  │ ← Window/context manager (handle.rs)
//!       └───────┬────────┘
//!               │ Generic over
//!   ┌───────────▼─────────────┐
//!   │ WindowBackend /         │ ← Backend contract (backend.rs)
//!   │ WindowSurface traits    │
//!   └───────────┬─────────────┘
//!               │ Implemented by
//!   ┌───────────▼───────────┐
//!   │ opengl::GlfwBackend   │ ← GLFW + OpenGL (../opengl)
//!   └───────────────────────┘
//! ```

pub mod backend;
pub mod error;
pub mod handle;

#[cfg(test)]
pub(crate) mod mock;

pub use backend::{WindowBackend, WindowEvent, WindowSurface};
pub use error::{WindowError, WindowResult};
pub use handle::{GlWindow, LifecycleState, WindowContext};
