//! Application module
//!
//! Handles configuration, windowing, GPU setup, and the run loop.

pub mod config;
pub mod renderer;
mod runner;
mod window;

pub use config::{AppConfig, GpuConfig, ShaderFormats, WindowConfig};
pub use runner::{App, STATUS_INIT_FAILED, STATUS_OK, StatusCell, status_to_exit_code};
pub use window::window_attributes_from_config;
