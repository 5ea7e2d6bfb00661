use super::layout::{ParticleUniforms, ParticleVertex};
use crate::core::{trail_fade, ParticleBuffer, Shape};
use wgpu::util::DeviceExt;

/// GPU buffers for one shape generation: the instance data ("geometry") and
/// the uniform buffer + bind group it is drawn with ("material").
pub(crate) struct ParticleBatch {
    pub(crate) shape: Shape,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) instances: u32,
}

impl ParticleBatch {
    pub(crate) fn new(
        device: &wgpu::Device,
        bgl: &wgpu::BindGroupLayout,
        particles: &ParticleBuffer,
    ) -> Self {
        let vertices = pack_vertices(particles);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particles_vertices"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("particles_uniforms"),
            size: std::mem::size_of::<ParticleUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("particles_bg"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        Self {
            shape: particles.shape,
            vertex_buffer,
            uniform_buffer,
            bind_group,
            instances: particles.len() as u32,
        }
    }

    /// Release the GPU-side buffers immediately instead of waiting for drop.
    pub(crate) fn destroy(self) {
        self.vertex_buffer.destroy();
        self.uniform_buffer.destroy();
    }
}

fn pack_vertices(particles: &ParticleBuffer) -> Vec<ParticleVertex> {
    particles
        .particles
        .iter()
        .map(|p| ParticleVertex {
            start: p.start.to_array(),
            seed: p.seed,
            target: p.target.to_array(),
            scale: p.scale,
            lag: p.lag_factor(),
            fade: trail_fade(p.trail_index, particles.trail_length),
        })
        .collect()
}
