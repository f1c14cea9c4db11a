//! GLFW windowing with an OpenGL context
//!
//! Function pointers are resolved through `glfwGetProcAddress` into the
//! global tables of the `gl` crate.

pub mod window;

pub use window::{GlfwBackend, GlfwSurface};
