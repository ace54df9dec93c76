//! Replace the near-black background of icon PNGs with full transparency,
//! overwriting the files in place.

pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod strip;
pub mod types;

pub use driver::run_batch;
pub use error::StripError;
pub use strip::{is_dark, strip_background, strip_dark_pixels};
pub use types::{AppConfig, BatchSummary, StripReport};

/// Set up `env_logger`, defaulting to `info` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
