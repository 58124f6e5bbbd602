//! Desktop frontend on winit + wgpu
//!
//! The event loop is never handed control with `run_app`. Instead the main
//! loop pumps it once per frame with a zero timeout, which drains every
//! queued event and returns immediately.
//!
//! Resources are released in reverse order of creation: renderer, window,
//! event loop. Teardown tolerates any of them missing and runs at most once.

use std::time::{Duration, Instant};

use kepler_math::Vec2;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::WindowId,
};

use crate::app::{AppError, Frontend};
use crate::config::{AppConfig, WindowConfig};
use crate::input::{InputAction, InputHandler};
use super::render::{RenderError, RenderSystem, BACKGROUND_COLOR};
use super::window::{WindowError, WindowSystem};

/// How long start-up waits for the platform to deliver the window
const STARTUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Pump timeout while waiting for the window
const STARTUP_POLL: Duration = Duration::from_millis(10);

/// Real window, renderer and event loop
pub struct DesktopFrontend {
    render: Option<RenderSystem>,
    window: Option<WindowSystem>,
    event_loop: Option<EventLoop<()>>,
}

impl DesktopFrontend {
    /// Create the event loop, window and renderer, then clear the canvas
    ///
    /// On failure everything created so far is released before returning.
    pub fn start(config: &AppConfig) -> Result<Self, AppError> {
        let mut frontend = Self {
            render: None,
            window: None,
            event_loop: None,
        };

        let event_loop = EventLoop::new().map_err(|e| AppError::EventLoop(e.to_string()))?;
        let event_loop = frontend.event_loop.insert(event_loop);

        let window = Self::open_window(event_loop, &config.window)?;
        let window = frontend.window.insert(window);

        let mut render = RenderSystem::new(
            window.window().clone(),
            (config.window.width, config.window.height),
            config.window.vsync,
        )?;
        render.clear_canvas(BACKGROUND_COLOR);
        frontend.render = Some(render);

        log::info!("Start-up complete");
        Ok(frontend)
    }

    fn open_window(
        event_loop: &mut EventLoop<()>,
        config: &WindowConfig,
    ) -> Result<WindowSystem, AppError> {
        let mut handler = StartupHandler {
            config,
            window: None,
            error: None,
        };
        let deadline = Instant::now() + STARTUP_TIMEOUT;

        loop {
            let status = event_loop.pump_app_events(Some(STARTUP_POLL), &mut handler);

            if let Some(error) = handler.error.take() {
                return Err(error.into());
            }
            if let Some(window) = handler.window.take() {
                return Ok(window);
            }
            if let PumpStatus::Exit(code) = status {
                return Err(AppError::EventLoop(format!(
                    "exited with code {} before the window was created",
                    code
                )));
            }
            if Instant::now() >= deadline {
                return Err(WindowError::StartupTimedOut.into());
            }
        }
    }
}

impl Frontend for DesktopFrontend {
    fn draw(&mut self, focus: Vec2, satellite: Vec2) -> Result<(), RenderError> {
        let Some(render) = self.render.as_mut() else {
            return Ok(());
        };

        match render.render_frame(focus, satellite) {
            Ok(()) => Ok(()),
            Err(RenderError::SurfaceLost) => {
                log::warn!("Surface lost, reconfiguring");
                render.reconfigure();
                Ok(())
            }
            Err(e) if !e.is_fatal() => {
                log::warn!("Skipping frame: {}", e);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn poll_input(&mut self, input: &mut InputHandler) {
        let Some(event_loop) = self.event_loop.as_mut() else {
            input.apply(InputAction::Quit);
            return;
        };

        let mut handler = PumpHandler {
            input,
            render: self.render.as_mut(),
        };

        if let PumpStatus::Exit(code) = event_loop.pump_app_events(Some(Duration::ZERO), &mut handler) {
            log::debug!("Event loop exited with code {}", code);
            handler.input.apply(InputAction::Quit);
        }
    }

    fn teardown(&mut self) {
        if let Some(render) = self.render.take() {
            drop(render);
            log::debug!("Renderer released");
        }
        if let Some(window) = self.window.take() {
            drop(window);
            log::debug!("Window released");
        }
        if let Some(event_loop) = self.event_loop.take() {
            drop(event_loop);
            log::debug!("Event loop released");
        }
    }
}

impl Drop for DesktopFrontend {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Creates the window the first time the platform resumes the application
struct StartupHandler<'a> {
    config: &'a WindowConfig,
    window: Option<WindowSystem>,
    error: Option<WindowError>,
}

impl ApplicationHandler for StartupHandler<'_> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.error.is_some() {
            return;
        }
        match WindowSystem::create(event_loop, self.config) {
            Ok(window) => self.window = Some(window),
            Err(e) => self.error = Some(e),
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, _event: WindowEvent) {}
}

/// Routes one frame's worth of events to input and the renderer
struct PumpHandler<'a> {
    input: &'a mut InputHandler,
    render: Option<&'a mut RenderSystem>,
}

impl ApplicationHandler for PumpHandler<'_> {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let WindowEvent::Resized(size) = event {
            if let Some(render) = self.render.as_mut() {
                render.resize(size.width, size.height);
            }
        }
        self.input.handle_window_event(&event);
    }
}
