//! Window management system
//!
//! Creates the single application window from [`WindowConfig`] and its
//! [`WindowFlags`].

use std::sync::Arc;
use winit::{
    dpi::PhysicalSize,
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window, WindowAttributes},
};
use crate::config::{WindowConfig, WindowFlags};

/// Owns the application window
pub struct WindowSystem {
    window: Arc<Window>,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let attrs = Self::attributes(config);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        log::info!(
            "Created window {}x{} ({:?})",
            config.width,
            config.height,
            config.flags()
        );

        Ok(Self { window })
    }

    /// Attributes for a window described by `config`
    pub fn attributes(config: &WindowConfig) -> WindowAttributes {
        let flags = config.flags();
        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(PhysicalSize::new(config.width, config.height))
            .with_resizable(flags.contains(WindowFlags::RESIZABLE));

        if flags.contains(WindowFlags::FULLSCREEN) {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        attrs
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
    /// The event loop never delivered the window
    StartupTimedOut,
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
            WindowError::StartupTimedOut => write!(f, "Timed out waiting for the window"),
        }
    }
}

impl std::error::Error for WindowError {}
