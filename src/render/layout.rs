// GPU-side data layouts shared by the particle pipeline and its buffers.

/// Mirrors `Uniforms` in `particles.wgsl` (176 bytes, 16-byte aligned).
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleUniforms {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub resolution: [f32; 2],
    pub time: f32,
    pub tension: f32,
    pub explosion: f32,
    pub _pad: [f32; 3],
}

/// One ghost copy as uploaded to the instance buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleVertex {
    pub start: [f32; 3],
    pub seed: f32,
    pub target: [f32; 3],
    pub scale: f32,
    pub lag: f32,
    pub fade: f32,
}

impl ParticleVertex {
    pub const ATTRIBS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        0 => Float32x3, // start
        1 => Float32,   // seed
        2 => Float32x3, // target
        3 => Float32,   // scale
        4 => Float32,   // trail lag factor
        5 => Float32,   // trail fade
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ParticleVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Vertices per instance: a two-triangle strip.
pub const QUAD_VERTICES: u32 = 4;
