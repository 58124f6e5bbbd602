//! Application systems
//!
//! Each system owns one concern of the running program: pacing, the orbit
//! simulation, the window, GPU rendering, and the desktop frontend that ties
//! window, renderer and event loop together.

mod pacer;
mod platform;
mod render;
mod simulation;
mod window;

pub use pacer::FramePacer;
pub use platform::DesktopFrontend;
pub use render::{frame_points, RenderError, RenderSystem, FOCUS_COLOR, SATELLITE_COLOR};
pub use simulation::SimulationSystem;
pub use window::{WindowError, WindowSystem};
