//! Main application handler and run loop
//!
//! The application is constructed from an immutable configuration, then
//! `run` blocks on the winit event loop until termination and yields an
//! integer status. The status is forwarded verbatim as the process exit
//! code by the entry point.

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use super::config::AppConfig;
use super::renderer::Renderer;
use super::window::window_attributes_from_config;

/// Run status for a clean application close
pub const STATUS_OK: i32 = 0;
/// Run status when the window or GPU backend cannot be brought up, or dies
pub const STATUS_INIT_FAILED: i32 = 1;

/// Write-once cell for the run loop's exit status
///
/// The first recorded value wins; later writes are ignored so a failure
/// status cannot be overwritten by the close handling that follows it.
#[derive(Debug, Default)]
pub struct StatusCell(Option<i32>);

impl StatusCell {
    /// Records a status unless one was already recorded
    pub fn set(&mut self, status: i32) {
        if self.0.is_none() {
            self.0 = Some(status);
        }
    }

    /// Returns the recorded status, or `STATUS_OK` if none was recorded
    pub fn get(&self) -> i32 {
        self.0.unwrap_or(STATUS_OK)
    }
}

/// Maps a run status to a process exit code
///
/// No interpretation happens here: the status is forwarded as-is, modulo
/// the platform's exit-code width (exit statuses are already reported
/// modulo 256 on unix).
pub fn status_to_exit_code(status: i32) -> ExitCode {
    ExitCode::from(status_byte(status))
}

/// Byte value a run status occupies as a process exit code
fn status_byte(status: i32) -> u8 {
    status as u8
}

/// What the event loop does after a draw attempt
///
/// The redraw chain is self-perpetuating: every non-fatal outcome must end
/// in another `request_redraw`, or presentation stalls while the loop keeps
/// polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DrawFollowup {
    /// Frame presented, or the error was transient; request the next frame
    Redraw,
    /// Surface needs reconfiguring before the next frame
    Reconfigure,
    /// Unrecoverable; record a failure status and exit
    Fatal,
}

fn draw_followup(result: &Result<(), wgpu::SurfaceError>) -> DrawFollowup {
    match result {
        Ok(()) => DrawFollowup::Redraw,
        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => DrawFollowup::Reconfigure,
        Err(wgpu::SurfaceError::OutOfMemory) => DrawFollowup::Fatal,
        // Timeout and other transient errors: skip the frame, keep going
        Err(_) => DrawFollowup::Redraw,
    }
}

/// Main application
pub struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    status: StatusCell,
}

impl App {
    /// Creates a new application with the provided configuration
    ///
    /// The window and GPU context are created when the event loop resumes;
    /// the configuration is consumed here and never mutated afterward.
    pub fn new(config: AppConfig) -> Self {
        info!(profile = %config.profile, "Starting application");
        info!(?config.window, "Window configuration");
        info!(?config.gpu, "GPU configuration");

        Self {
            config,
            window: None,
            renderer: None,
            status: StatusCell::default(),
        }
    }

    /// Creates a new application with configuration loaded from environment
    pub fn from_env() -> Self {
        let config = AppConfig::load_from_env().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load config, using default configuration");
            AppConfig::default()
        });
        Self::new(config)
    }

    /// Blocks on the event loop until the application terminates
    ///
    /// Consuming `self` makes a second invocation unrepresentable. The
    /// returned status follows the convention above and is never
    /// reinterpreted by callers.
    pub fn run(mut self) -> anyhow::Result<i32> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)?;

        let status = self.status.get();
        info!(status, "Run loop finished");
        Ok(status)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = window_attributes_from_config(&self.config.window);

            match event_loop.create_window(window_attributes) {
                Ok(window) => {
                    let size = window.inner_size();
                    info!(
                        window.width = size.width,
                        window.height = size.height,
                        "Window created successfully"
                    );

                    let window = Arc::new(window);

                    // winit's event loop is synchronous, so the async
                    // renderer setup runs on a dedicated runtime
                    let renderer = tokio::runtime::Runtime::new()
                        .expect("Failed to create tokio runtime")
                        .block_on(async {
                            Renderer::new(
                                window.clone(),
                                &self.config.gpu,
                                self.config.window.vsync,
                            )
                            .await
                        });

                    match renderer {
                        Ok(renderer) => {
                            info!(
                                formats = ?renderer.shader_formats(),
                                "Renderer initialized successfully"
                            );
                            self.renderer = Some(renderer);
                            self.window = Some(window);
                        }
                        Err(e) => {
                            error!(error = %e, "Failed to initialize renderer");
                            self.status.set(STATUS_INIT_FAILED);
                            event_loop.exit();
                        }
                    }
                }
                Err(e) => {
                    error!(error = %e, "Failed to create window");
                    self.status.set(STATUS_INIT_FAILED);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, exiting");
                self.status.set(STATUS_OK);
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => {
                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    let result = renderer.draw();
                    match draw_followup(&result) {
                        DrawFollowup::Redraw => {
                            if let Err(e) = result {
                                error!(error = %e, "Render error, skipping frame");
                            }
                            window.request_redraw();
                        }
                        DrawFollowup::Reconfigure => {
                            warn!("Surface lost, reconfiguring");
                            let size = window.inner_size();
                            renderer.resize(size);
                            window.request_redraw();
                        }
                        DrawFollowup::Fatal => {
                            error!("Out of memory, exiting");
                            self.status.set(STATUS_INIT_FAILED);
                            event_loop.exit();
                        }
                    }
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_cell_defaults_to_ok() {
        let cell = StatusCell::default();
        assert_eq!(cell.get(), STATUS_OK);
    }

    #[test]
    fn test_status_cell_first_write_wins() {
        let mut cell = StatusCell::default();
        cell.set(STATUS_INIT_FAILED);
        cell.set(STATUS_OK);

        assert_eq!(cell.get(), STATUS_INIT_FAILED);
    }

    #[test]
    fn test_status_cell_records_sentinels() {
        for sentinel in [0, 1, 7, 42] {
            let mut cell = StatusCell::default();
            cell.set(sentinel);
            assert_eq!(cell.get(), sentinel);
        }
    }

    #[test]
    fn test_exit_code_forwards_status_verbatim() {
        assert_eq!(status_byte(0), 0);
        assert_eq!(status_byte(1), 1);
        assert_eq!(status_byte(7), 7);
        assert_eq!(status_byte(42), 42);
    }

    #[test]
    fn test_exit_code_wraps_like_process_status() {
        // Unix reports exit statuses modulo 256
        assert_eq!(status_byte(256), 0);
        assert_eq!(status_byte(257), 1);
    }

    #[test]
    fn test_transient_surface_errors_keep_redraw_chain_alive() {
        // A skipped frame must still request the next one, or presentation
        // stalls while the loop keeps polling
        assert_eq!(
            draw_followup(&Err(wgpu::SurfaceError::Timeout)),
            DrawFollowup::Redraw
        );
        assert_eq!(
            draw_followup(&Err(wgpu::SurfaceError::Other)),
            DrawFollowup::Redraw
        );
        assert_eq!(draw_followup(&Ok(())), DrawFollowup::Redraw);
    }

    #[test]
    fn test_surface_loss_reconfigures_before_next_frame() {
        assert_eq!(
            draw_followup(&Err(wgpu::SurfaceError::Lost)),
            DrawFollowup::Reconfigure
        );
        assert_eq!(
            draw_followup(&Err(wgpu::SurfaceError::Outdated)),
            DrawFollowup::Reconfigure
        );
    }

    #[test]
    fn test_out_of_memory_is_fatal() {
        assert_eq!(
            draw_followup(&Err(wgpu::SurfaceError::OutOfMemory)),
            DrawFollowup::Fatal
        );
    }

    #[test]
    fn test_from_env_defers_os_resources() {
        let app = App::from_env();

        assert!(app.window.is_none());
        assert!(app.renderer.is_none());
        assert_eq!(app.status.get(), STATUS_OK);
    }
}
