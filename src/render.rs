use crate::constants::*;
use crate::core::{Camera, FrameUniforms, GpuBackend, ParticleBuffer, RenderError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use web_sys as web;

mod batch;
pub(crate) mod layout;
mod pipeline;

use batch::ParticleBatch;
use layout::{ParticleUniforms, QUAD_VERTICES};

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    bgl: wgpu::BindGroupLayout,
    // Current shape generation; replaced wholesale on shape change
    batch: Option<ParticleBatch>,
    camera: Camera,
    canvas: web::HtmlCanvasElement,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(
        canvas: web::HtmlCanvasElement,
        backend: GpuBackend,
        lost: Arc<AtomicBool>,
    ) -> Result<Self, RenderError> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let backends = match backend {
            GpuBackend::WebGpu => wgpu::Backends::BROWSER_WEBGPU,
            GpuBackend::Gl => wgpu::Backends::GL,
        };
        log::info!("[gpu] requesting {:?}", backends);
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends,
            ..Default::default()
        });
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| RenderError::GpuInit(e.to_string()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| RenderError::GpuInit("no adapter".to_string()))?;
        log::info!("[gpu] adapter backend={:?}", adapter.get_info().backend);

        // WebGL2 cannot satisfy the full WebGPU limits
        let required_limits = if backend == GpuBackend::Gl {
            wgpu::Limits::downlevel_webgl2_defaults()
        } else {
            wgpu::Limits::default()
        }
        .using_resolution(adapter.limits());
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits,
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| RenderError::GpuInit(format!("request_device: {}", e)))?;
        device.set_device_lost_callback(move |reason, message| {
            // `Destroyed` is our own release, not a loss
            if matches!(reason, wgpu::DeviceLostReason::Destroyed) {
                return;
            }
            log::warn!("[gpu] device lost ({:?}): {}", reason, message);
            lost.store(true, Ordering::SeqCst);
        });

        let caps = surface.get_capabilities(&adapter);
        // Hex colors are already display-encoded, so prefer a non-sRGB target
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| RenderError::GpuInit("surface reports no formats".to_string()))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let pipeline::PipelineResources { pipeline, bgl } =
            pipeline::create_particle_pipeline(&device, format);

        let mut camera = Camera::new(CAMERA_Z, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_FAR);
        camera.set_viewport(width, height);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            bgl,
            batch: None,
            camera,
            canvas,
            width,
            height,
        })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    /// Replace the particle generation. The previous buffers are destroyed
    /// before the new ones are allocated.
    pub fn rebuild(&mut self, particles: &ParticleBuffer) {
        if let Some(old) = self.batch.take() {
            old.destroy();
        }
        if particles.is_empty() {
            log::warn!("[shape] {} has no particles", particles.shape.label());
            return;
        }
        let batch = ParticleBatch::new(&self.device, &self.bgl, particles);
        log::info!(
            "[shape] {} rebuilt: {} particles x {} trail = {} vertices",
            batch.shape.label(),
            particles.count,
            particles.trail_length,
            batch.instances
        );
        self.batch = Some(batch);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.camera.set_viewport(width, height);
        }
    }

    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, frame: &FrameUniforms) -> Result<(), wgpu::SurfaceError> {
        if let Some(batch) = &self.batch {
            let [r, g, b] = frame.color;
            let u = ParticleUniforms {
                view: self.camera.view_matrix().to_cols_array_2d(),
                proj: self.camera.projection_matrix().to_cols_array_2d(),
                color: [r, g, b, 1.0],
                resolution: [self.width as f32, self.height as f32],
                time: frame.time,
                tension: frame.tension,
                explosion: frame.explosion,
                _pad: [0.0; 3],
            };
            self.queue
                .write_buffer(&batch.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("particles_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if let Some(batch) = &self.batch {
                rpass.set_pipeline(&self.pipeline);
                rpass.set_bind_group(0, &batch.bind_group, &[]);
                rpass.set_vertex_buffer(0, batch.vertex_buffer.slice(..));
                rpass.draw(0..QUAD_VERTICES, 0..batch.instances);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }

    /// Tear down GPU resources ahead of dropping the state.
    pub fn release(mut self) {
        if let Some(batch) = self.batch.take() {
            batch.destroy();
        }
        self.device.destroy();
    }
}
