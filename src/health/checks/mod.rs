//! Built-in health checks for core systems

pub mod build_info;
pub mod config;
pub mod graphics_backend;
pub mod shader_format;
pub mod system_info;
pub mod window;

pub use build_info::BuildInfoCheck;
pub use config::ConfigCheck;
pub use graphics_backend::GraphicsBackendCheck;
pub use shader_format::ShaderFormatCheck;
pub use system_info::SystemInfoCheck;
pub use window::WindowConfigCheck;
