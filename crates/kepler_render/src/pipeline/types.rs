//! GPU-compatible data types for the point and blit pipelines
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};
use kepler_math::Vec2;

use crate::color::Color;

/// A single point in canvas pixel space with color
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct PointVertex {
    /// Integer pixel coordinates stored as floats (x right, y down)
    pub position: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
}

impl PointVertex {
    /// Create a point at an integer pixel
    pub fn at_pixel(x: i32, y: i32, color: Color) -> Self {
        Self {
            position: [x as f32, y as f32],
            color: color.to_array(),
        }
    }

    /// Create a point at `position`, truncated to its integer pixel
    pub fn snapped(position: Vec2, color: Color) -> Self {
        let (x, y) = position.to_pixel();
        Self::at_pixel(x, y, color)
    }

    /// Vertex buffer layout matching `points.wgsl`
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position: vec2<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                },
                // color: vec4<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 8,
                    shader_location: 1,
                },
            ],
        }
    }
}

/// Uniforms for converting canvas pixels to clip space
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CanvasUniforms {
    /// Canvas width and height in pixels
    pub size: [f32; 2],
    /// Padding for 16-byte alignment
    pub _padding: [f32; 2],
}

impl CanvasUniforms {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: [width as f32, height as f32],
            _padding: [0.0; 2],
        }
    }
}
