//! Shader parameters for drawing a glass panel on the GPU.
//!
//! One [`PanelUniforms`] block describes a whole panel frame: a fragment
//! shader evaluates the rounded-rect SDF from `inset_rect`/`radii`, fills
//! with `fill_color`, strokes `border_width` with the base color and the
//! streak gradient, then adds the sweep gradient inside the shape.

use wgpu::util::DeviceExt;

use crate::widgets::glass_panel::PanelFrame;

/// Uniform block laid out in 16-byte rows so it matches WGSL's uniform
/// address space rules without manual padding.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PanelUniforms {
    /// Panel size in pixels, then the streak progress and the sweep progress
    pub size_progress: [f32; 4],
    /// Inset rect edges: left, top, right, bottom
    pub inset_rect: [f32; 4],
    /// Corner radii after primitive normalization: tl, tr, br, bl
    pub radii: [f32; 4],
    /// Border width, streak angle in degrees, sweep band half width, unused
    pub params: [f32; 4],
    pub fill_color: [f32; 4],
    pub border_color: [f32; 4],
    /// Streak gradient endpoints after its local matrix: x0, y0, x1, y1
    pub streak_line: [f32; 4],
    pub streak_color: [f32; 4],
    /// Sweep gradient endpoints: x0, y0, x1, y1
    pub sweep_line: [f32; 4],
    pub sweep_color: [f32; 4],
}

impl PanelUniforms {
    pub fn from_frame(frame: &PanelFrame) -> Self {
        let inset = frame.geometry.inset;
        let streak_start = frame.streak.gradient.mapped_start();
        let streak_end = frame.streak.gradient.mapped_end();
        let sweep_start = frame.sweep.gradient.mapped_start();
        let sweep_end = frame.sweep.gradient.mapped_end();

        Self {
            size_progress: [
                frame.size.width,
                frame.size.height,
                frame.streak.progress,
                frame.sweep.progress,
            ],
            inset_rect: [inset.left(), inset.top(), inset.right(), inset.bottom()],
            radii: frame.geometry.shape.radii,
            params: [
                frame.geometry.border_width,
                frame.streak.angle,
                frame.sweep.band_half_width,
                0.0,
            ],
            fill_color: frame.style.fill.to_array(),
            border_color: frame.style.border.to_array(),
            streak_line: [streak_start.x, streak_start.y, streak_end.x, streak_end.y],
            streak_color: frame.style.streak.to_array(),
            sweep_line: [sweep_start.x, sweep_start.y, sweep_end.x, sweep_end.y],
            sweep_color: frame.style.sweep.to_array(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// A wgpu uniform buffer holding one panel's [`PanelUniforms`].
pub struct PanelUniformBuffer {
    buffer: wgpu::Buffer,
}

impl PanelUniformBuffer {
    pub fn new(device: &wgpu::Device, uniforms: &PanelUniforms) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Glass Panel Uniform Buffer"),
            contents: uniforms.as_bytes(),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        Self { buffer }
    }

    /// Upload a new frame's parameters.
    pub fn write(&self, queue: &wgpu::Queue, uniforms: &PanelUniforms) {
        queue.write_buffer(&self.buffer, 0, uniforms.as_bytes());
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Layout entry for binding the buffer to a fragment shader.
    pub fn layout_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
        wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: wgpu::BufferSize::new(std::mem::size_of::<PanelUniforms>() as u64),
            },
            count: None,
        }
    }
}
