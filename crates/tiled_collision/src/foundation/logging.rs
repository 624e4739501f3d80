//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// Reads the filter from `RUST_LOG`. Safe to call more than once; later calls
/// are ignored.
pub fn init() {
    let _ = env_logger::try_init();
}

/// Initialize logging with an explicit default filter (e.g. `"debug"`)
///
/// `RUST_LOG` still takes precedence when it is set.
pub fn init_with_level(level: &str) {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}
