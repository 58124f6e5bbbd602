//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - The persistent canvas every frame draws onto
//! - Point and blit pipelines
//!
//! Points are plotted on the canvas before the surface is acquired. A frame
//! whose surface texture is unavailable still leaves its points behind, so
//! the trail has no gaps.

use std::sync::Arc;
use winit::window::Window;
use kepler_math::Vec2;
use kepler_render::{
    BlitPipeline, Canvas, Color, ContextError, PointPipeline, PointVertex, RenderContext,
};

/// Color of the fixed focus
pub const FOCUS_COLOR: Color = Color::WHITE;
/// Color of the orbiting satellite
pub const SATELLITE_COLOR: Color = Color::MAGENTA;
/// Color the canvas is cleared to at start-up
pub const BACKGROUND_COLOR: Color = Color::BLACK;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost or outdated (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
    /// GPU initialization failed
    Context(ContextError),
}

impl RenderError {
    /// Whether rendering cannot continue after this error
    pub fn is_fatal(&self) -> bool {
        matches!(self, RenderError::OutOfMemory | RenderError::Context(_))
    }
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
            RenderError::Context(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Context(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            other => RenderError::Other(format!("{:?}", other)),
        }
    }
}

/// The two points drawn every frame, focus first
pub fn frame_points(focus: Vec2, satellite: Vec2) -> [PointVertex; 2] {
    [
        PointVertex::snapped(focus, FOCUS_COLOR),
        PointVertex::snapped(satellite, SATELLITE_COLOR),
    ]
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    canvas: Canvas,
    point_pipeline: PointPipeline,
    blit_pipeline: BlitPipeline,
}

impl RenderSystem {
    /// Create render system for `window` with a canvas of `canvas_size` pixels
    pub fn new(
        window: Arc<Window>,
        canvas_size: (u32, u32),
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let canvas = Canvas::new(&context.device, canvas_size.0, canvas_size.1);
        let point_pipeline = PointPipeline::new(&context.device, &canvas);
        let blit_pipeline = BlitPipeline::new(&context.device, context.format(), &canvas);

        log::info!(
            "Renderer ready: canvas {}x{}, surface {}x{}",
            canvas_size.0,
            canvas_size.1,
            context.size.width,
            context.size.height
        );

        Ok(Self {
            context,
            canvas,
            point_pipeline,
            blit_pipeline,
        })
    }

    /// Fill the canvas with `color`, erasing the trail
    pub fn clear_canvas(&mut self, color: Color) {
        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Clear Encoder"),
            });
        self.canvas.clear(&mut encoder, color);
        self.context.queue.submit(std::iter::once(encoder.finish()));
    }

    /// Handle window resize
    ///
    /// Only the swapchain follows the window; the canvas keeps its size and
    /// contents and is stretched over the new surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Configure the surface again after it was lost
    pub fn reconfigure(&mut self) {
        self.context.reconfigure();
    }

    /// Plot focus and satellite on the canvas and present it
    pub fn render_frame(&mut self, focus: Vec2, satellite: Vec2) -> Result<(), RenderError> {
        let points = frame_points(focus, satellite);

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.point_pipeline.draw(
            &self.context.device,
            &self.context.queue,
            &mut encoder,
            &self.canvas,
            &points,
        );

        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(e) => {
                // Keep the points even though nothing is presented
                self.context.queue.submit(std::iter::once(encoder.finish()));
                return Err(e.into());
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.blit_pipeline.render(&mut encoder, &view);

        // Submit
        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
