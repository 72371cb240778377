//! GPU backend setup and per-frame presentation
//!
//! The renderer owns the wgpu surface, device, and queue. At construction it
//! negotiates the shader-format preference from configuration against what
//! the adapter can actually load; the negotiated set decides which device
//! features are requested. Frames are cleared and presented; drawing beyond
//! the clear is out of scope for this demo.

use std::sync::Arc;

use tracing::{info, warn};
use wgpu::{Device, Queue, Surface, SurfaceConfiguration};
use winit::window::Window;

use super::config::{GpuConfig, ShaderFormats};

/// Clear color for presented frames
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.1,
    g: 0.1,
    b: 0.1,
    a: 1.0,
};

/// Intersects the configured format preference with what the adapter
/// supports, falling back to WGSL when the intersection is empty
///
/// WGSL must always be in the supported set; wgpu compiles it on every
/// adapter.
pub fn negotiate_formats(requested: ShaderFormats, supported: ShaderFormats) -> ShaderFormats {
    let negotiated = requested & supported;
    if negotiated.is_empty() {
        ShaderFormats::WGSL
    } else {
        negotiated
    }
}

/// Shader formats loadable on the given adapter
fn supported_formats(adapter: &wgpu::Adapter) -> ShaderFormats {
    let mut supported = ShaderFormats::WGSL;
    if adapter
        .features()
        .contains(wgpu::Features::EXPERIMENTAL_PASSTHROUGH_SHADERS)
    {
        supported |= ShaderFormats::SPIRV;
    }
    supported
}

/// Renderer handles wgpu setup and frame presentation
pub struct Renderer {
    surface: Surface<'static>,
    device: Device,
    queue: Queue,
    config: SurfaceConfiguration,
    shader_formats: ShaderFormats,
}

impl Renderer {
    /// Returns the shader formats negotiated with the adapter
    pub fn shader_formats(&self) -> ShaderFormats {
        self.shader_formats
    }

    /// Creates a new renderer for the given window
    pub async fn new(window: Arc<Window>, gpu: &GpuConfig, vsync: bool) -> anyhow::Result<Self> {
        info!("Initializing wgpu renderer");

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: gpu.power_preference.into(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        info!(
            adapter.name = adapter.get_info().name,
            adapter.backend = ?adapter.get_info().backend,
            "Found GPU adapter"
        );

        // Negotiate the shader-format preference against the adapter
        let requested = gpu.formats();
        let supported = supported_formats(&adapter);
        let shader_formats = negotiate_formats(requested, supported);
        if !supported.contains(requested) {
            warn!(
                ?requested,
                ?supported,
                ?shader_formats,
                "Adapter cannot load every requested shader format"
            );
        }
        info!(formats = ?shader_formats, "Negotiated shader formats");

        let mut required_features = wgpu::Features::empty();
        if shader_formats.contains(ShaderFormats::SPIRV) {
            required_features |= wgpu::Features::EXPERIMENTAL_PASSTHROUGH_SHADERS;
        }

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Main Device"),
                required_features,
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
                experimental_features: Default::default(),
            })
            .await?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let present_mode = if vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        };

        let config = SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &config);

        info!(
            surface.width = config.width,
            surface.height = config.height,
            surface.format = ?config.format,
            "Surface configured"
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            shader_formats,
        })
    }

    /// Resizes the surface
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);

            info!(
                width = new_size.width,
                height = new_size.height,
                "Surface resized"
            );
        }
    }

    /// Clears and presents one frame
    pub fn draw(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let _rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Clear Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negotiate_keeps_requested_subset() {
        let requested = ShaderFormats::SPIRV;
        let supported = ShaderFormats::SPIRV | ShaderFormats::WGSL;

        assert_eq!(negotiate_formats(requested, supported), ShaderFormats::SPIRV);
    }

    #[test]
    fn test_negotiate_intersects_with_supported() {
        let requested = ShaderFormats::SPIRV | ShaderFormats::WGSL;
        let supported = ShaderFormats::WGSL;

        assert_eq!(negotiate_formats(requested, supported), ShaderFormats::WGSL);
    }

    #[test]
    fn test_negotiate_falls_back_to_wgsl_on_empty_intersection() {
        let requested = ShaderFormats::SPIRV;
        let supported = ShaderFormats::WGSL;

        assert_eq!(negotiate_formats(requested, supported), ShaderFormats::WGSL);
    }
}
