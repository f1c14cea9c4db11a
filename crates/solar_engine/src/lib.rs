//! # Solar Engine
//!
//! Window and OpenGL context bootstrap for the Solar System Simulation.
//!
//! ## Features
//!
//! - **Scoped Window Ownership**: window and windowing library released on every exit path
//! - **Typed Setup Errors**: each setup step reports its own [`WindowError`]
//! - **Explicit Configuration**: window size, title and context version in serde-backed config
//! - **Render Loop**: [`Application`] trait as the per-frame extension point
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use solar_engine::prelude::*;
//!
//! struct MyApp;
//!
//! impl<B: WindowBackend> Application<B> for MyApp {}
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApplicationConfig::default();
//!     let mut engine: Engine = Engine::new(&config)?;
//!     engine.run(&mut MyApp)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod core;
pub mod foundation;
pub mod render;

mod application;
mod engine;

pub use application::{Application, AppError};
pub use engine::{Engine, EngineError, RunStats};
pub use render::window::{WindowError, WindowResult};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Application, AppError,
        Engine, EngineError, RunStats,
        core::config::{ApplicationConfig, ClearColor, Config, ContextConfig, EngineConfig, GlProfile, WindowConfig},
        foundation::time::FrameInfo,
        render::window::{GlWindow, LifecycleState, WindowBackend, WindowContext, WindowError, WindowEvent},
    };
}
