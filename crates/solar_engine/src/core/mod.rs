//! # Core Engine Module
//!
//! Shared configuration types used by the window and the render loop.

pub mod config;

// Re-export commonly used config types
pub use config::{
    ApplicationConfig,
    ClearColor,
    Config,
    ConfigError,
    ContextConfig,
    EngineConfig,
    GlProfile,
    WindowConfig,
};
