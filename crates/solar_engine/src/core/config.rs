//! # Unified Configuration System
//!
//! All configuration structures for the window, its graphics context and the
//! render loop live here. Every struct derives `Serialize`/`Deserialize` and
//! fills missing fields from its `Default`, so partial TOML or RON files load.
//!
//! The defaults reproduce the stock Solar System Simulation window:
//! a non-resizable 1290x720 window with an OpenGL 3.3 core context,
//! cleared to opaque black every frame.

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError};

/// Default window title
pub const DEFAULT_TITLE: &str = "Solar System Simulation";
/// Default window width in pixels
pub const DEFAULT_WIDTH: u32 = 1290;
/// Default window height in pixels
pub const DEFAULT_HEIGHT: u32 = 720;

/// OpenGL profile requested for the context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlProfile {
    /// Core profile, deprecated functionality removed
    Core,
    /// Compatibility profile
    Compat,
    /// Let the driver decide
    Any,
}

/// # Graphics Context Configuration
///
/// Requested OpenGL version and profile, applied as window hints before the
/// window is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Requested major version
    pub major: u32,
    /// Requested minor version
    pub minor: u32,
    /// Requested profile
    pub profile: GlProfile,
    /// Request a forward-compatible context (required for core profiles on macOS)
    pub forward_compat: bool,
}

impl ContextConfig {
    /// Create a context configuration for the given version with a core profile
    pub fn core(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            profile: GlProfile::Core,
            forward_compat: cfg!(target_os = "macos"),
        }
    }

    /// Validate the requested version
    pub fn validate(&self) -> Result<(), String> {
        if self.major == 0 {
            return Err(format!("Invalid OpenGL version {}.{}", self.major, self.minor));
        }
        // Profiles only exist from 3.2 onwards
        if self.profile != GlProfile::Any && (self.major, self.minor) < (3, 2) {
            return Err(format!(
                "OpenGL profile {:?} requires version 3.2 or newer, got {}.{}",
                self.profile, self.major, self.minor
            ));
        }
        Ok(())
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self::core(3, 3)
    }
}

/// RGBA color used to clear the framebuffer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClearColor {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Alpha channel
    pub a: f32,
}

impl ClearColor {
    /// Opaque black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Create a new clear color
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Clamp every channel into `[0, 1]`
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }
}

impl Default for ClearColor {
    fn default() -> Self {
        Self::BLACK
    }
}

/// # Window Configuration
///
/// Everything needed to open the window and bind its context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Whether the user may resize the window
    pub resizable: bool,
    /// Synchronize buffer swaps with the display refresh
    pub vsync: bool,
    /// Graphics context request
    pub context: ContextConfig,
    /// Color the default render pass clears to
    pub clear_color: ClearColor,
}

impl WindowConfig {
    /// Create a window configuration with the given title and size
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the graphics context request
    pub fn with_context(mut self, context: ContextConfig) -> Self {
        self.context = context;
        self
    }

    /// Set the clear color
    pub fn with_clear_color(mut self, color: ClearColor) -> Self {
        self.clear_color = color;
        self
    }

    /// Enable or disable vsync
    pub fn with_vsync(mut self, enabled: bool) -> Self {
        self.vsync = enabled;
        self
    }

    /// Allow or forbid resizing
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Validate dimensions, title and context request
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!("Window size must be non-zero, got {}x{}", self.width, self.height));
        }
        if self.title.trim().is_empty() {
            return Err("Window title must not be empty".to_string());
        }
        self.context.validate()
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            resizable: false,
            vsync: true,
            context: ContextConfig::default(),
            clear_color: ClearColor::BLACK,
        }
    }
}

/// # Engine Configuration
///
/// Render loop and logging behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
    /// Stop the loop after this many frames
    pub frame_limit: Option<u64>,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            frame_limit: None,
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Stop the render loop after `frames` frames
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration applications should use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Engine configuration
    pub engine: EngineConfig,
    /// Window configuration
    pub window: WindowConfig,
}

impl ApplicationConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), String> {
        self.window.validate()
    }
}

impl Config for ApplicationConfig {}
