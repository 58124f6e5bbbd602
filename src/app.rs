//! Application driver
//!
//! Start-up builds the frontend and the orbit, then [`run_loop`] repeats
//!
//! 1. mark the frame start
//! 2. advance the orbit one tick
//! 3. draw focus and satellite
//! 4. drain pending input
//! 5. sleep out the rest of the frame budget
//!
//! until input asks to quit. A quit seen in step 4 stops the loop at the next
//! check, never in the middle of a frame. Teardown always follows the loop.

use kepler_math::Vec2;

use crate::cli::Cli;
use crate::config::{AppConfig, ConfigError};
use crate::input::InputHandler;
use crate::systems::{DesktopFrontend, FramePacer, RenderError, SimulationSystem, WindowError};

/// The outside world the driver draws to and reads input from
pub trait Frontend {
    /// Draw one frame
    ///
    /// Recoverable problems are handled by the frontend; an `Err` ends the run.
    fn draw(&mut self, focus: Vec2, satellite: Vec2) -> Result<(), RenderError>;

    /// Drain every pending input event into `input` without blocking
    fn poll_input(&mut self, input: &mut InputHandler);

    /// Release all resources; calling it again does nothing
    fn teardown(&mut self);
}

/// Fatal driver errors
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    /// The windowing event loop could not be created or stopped early
    EventLoop(String),
    Window(WindowError),
    Render(RenderError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "{}", e),
            AppError::EventLoop(msg) => write!(f, "Event loop error: {}", msg),
            AppError::Window(e) => write!(f, "{}", e),
            AppError::Render(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::EventLoop(_) => None,
            AppError::Window(e) => Some(e),
            AppError::Render(e) => Some(e),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl From<WindowError> for AppError {
    fn from(e: WindowError) -> Self {
        AppError::Window(e)
    }
}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        AppError::Render(e)
    }
}

/// Run frames until `input` requests a quit; returns the number of frames
pub fn run_loop<F: Frontend>(
    frontend: &mut F,
    sim: &mut SimulationSystem,
    pacer: &mut FramePacer,
    input: &mut InputHandler,
) -> Result<u64, AppError> {
    let mut frames = 0;
    while !input.quit_requested() {
        pacer.begin();
        sim.update();
        frontend.draw(sim.focus(), sim.satellite())?;
        frontend.poll_input(input);
        pacer.end();
        frames += 1;
    }
    Ok(frames)
}

/// Run the loop on `frontend` and tear it down however the loop ended
pub fn drive<F: Frontend>(
    frontend: &mut F,
    sim: &mut SimulationSystem,
    pacer: &mut FramePacer,
) -> Result<u64, AppError> {
    let mut input = InputHandler::new();
    let result = run_loop(frontend, sim, pacer, &mut input);
    frontend.teardown();
    result
}

/// Simulation for `config`, with the focus at the window centre
pub fn simulation_for(config: &AppConfig) -> SimulationSystem {
    let (focus_x, focus_y) = config.focus_pixel();
    SimulationSystem::new(
        config.orbit.to_orbit_params(),
        Vec2::new(focus_x as f32, focus_y as f32),
    )
}

/// Open the window and run until the user quits
pub fn run(config: &AppConfig) -> Result<u64, AppError> {
    log::debug!("Configuration: {:?}", config);

    let mut frontend = DesktopFrontend::start(config)?;
    let mut sim = simulation_for(config);
    let mut pacer = FramePacer::from_config(&config.frame);

    let frames = drive(&mut frontend, &mut sim, &mut pacer)?;
    log::info!("Rendered {} frames", frames);
    Ok(frames)
}

/// Build the configuration for `cli` and run
pub fn run_cli(cli: &Cli) -> Result<u64, AppError> {
    if !cli.args.is_empty() {
        log::debug!("Ignoring extra arguments: {:?}", cli.args);
    }
    let config = AppConfig::from_cli(cli)?;
    run(&config)
}
