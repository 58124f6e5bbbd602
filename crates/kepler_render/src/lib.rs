//! Orbit Rendering Library
//!
//! This crate provides the wgpu side of the orbit renderer.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`canvas::Canvas`] - Persistent off-screen drawing surface (never re-cleared)
//! - [`pipeline::PointPipeline`] - Draws single-pixel points onto the canvas
//! - [`pipeline::BlitPipeline`] - Copies the canvas onto the window surface
//!
//! Drawing is "accumulate" mode: every point ever drawn stays on the canvas
//! until the canvas is explicitly cleared, which leaves a trail behind a
//! moving point.

pub mod canvas;
pub mod color;
pub mod context;
pub mod pipeline;

pub use canvas::Canvas;
pub use color::Color;
pub use context::{ContextError, RenderContext};
pub use pipeline::{BlitPipeline, PointPipeline, PointVertex};
