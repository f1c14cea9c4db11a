//! Logging bootstrap

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// `default_filter` applies when `RUST_LOG` is unset. Calling this more than
/// once is harmless; later calls are ignored.
pub fn init(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}
