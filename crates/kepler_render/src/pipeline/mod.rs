//! Rendering pipeline components
//!
//! Two pipelines cooperate every frame:
//! 1. [`PointPipeline`] rasterizes single-pixel points onto the canvas
//! 2. [`BlitPipeline`] stretches the canvas over the window surface

pub mod types;
pub mod point_pipeline;
pub mod blit_pipeline;

pub use types::{CanvasUniforms, PointVertex};
pub use point_pipeline::PointPipeline;
pub use blit_pipeline::BlitPipeline;
