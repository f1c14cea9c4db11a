//! Window setup errors

use thiserror::Error;

/// Window and context setup errors
///
/// Each variant corresponds to one setup step. Resources acquired by earlier
/// steps have already been released by the time the error is returned.
#[derive(Error, Debug)]
pub enum WindowError {
    /// The configuration was rejected before touching the windowing library
    #[error("Invalid window configuration: {0}")]
    InvalidConfig(String),

    /// The windowing library could not be initialized
    #[error("Failed to initialize windowing library: {0}")]
    InitializationFailed(String),

    /// The window (and its context) could not be created
    #[error("Failed to create window")]
    CreationFailed,

    /// Graphics API entry points could not be resolved
    #[error("Failed to load OpenGL functions: {0}")]
    FunctionLoadingFailed(String),
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;
