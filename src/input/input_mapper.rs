//! Input mapping from raw events to semantic actions
//!
//! Only two events mean anything here: the window close request and a press
//! of Escape. Both ask the application to quit. Everything else is ignored.

use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Actions triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Stop the main loop at the next iteration boundary
    Quit,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(Quit)` for an Escape press, `None` for anything else
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Quit),
            _ => None,
        }
    }

    /// Map a key event, ignoring keys without a physical code
    pub fn map_key_event(event: &KeyEvent) -> Option<InputAction> {
        match event.physical_key {
            PhysicalKey::Code(key) => Self::map_keyboard(key, event.state),
            PhysicalKey::Unidentified(_) => None,
        }
    }

    /// The window manager asked to close the window
    pub fn map_close_requested() -> InputAction {
        InputAction::Quit
    }

    /// Map any window event to an action
    pub fn map_window_event(event: &WindowEvent) -> Option<InputAction> {
        match event {
            WindowEvent::CloseRequested => Some(Self::map_close_requested()),
            WindowEvent::KeyboardInput { event, .. } => Self::map_key_event(event),
            _ => None,
        }
    }
}

/// Application state driven by input
#[derive(Debug, Default)]
pub struct InputHandler {
    quit: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a mapped action
    pub fn apply(&mut self, action: InputAction) {
        match action {
            InputAction::Quit => {
                if !self.quit {
                    log::info!("Quit requested");
                }
                self.quit = true;
            }
        }
    }

    /// Map and apply a window event, returning the action it produced
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> Option<InputAction> {
        let action = InputMapper::map_window_event(event);
        if let Some(action) = action {
            self.apply(action);
        }
        action
    }

    /// Whether the main loop should stop
    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_press_quits() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed);
        assert_eq!(action, Some(InputAction::Quit));
    }

    #[test]
    fn test_key_release_ignored() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Released);
        assert_eq!(action, None);
    }

    #[test]
    fn test_other_keys_not_mapped() {
        for key in [KeyCode::KeyQ, KeyCode::KeyF, KeyCode::Space, KeyCode::Enter] {
            let action = InputMapper::map_keyboard(key, ElementState::Pressed);
            assert_eq!(action, None, "Key {:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_close_request_quits() {
        assert_eq!(
            InputMapper::map_window_event(&WindowEvent::CloseRequested),
            Some(InputAction::Quit)
        );
    }

    #[test]
    fn test_unrelated_window_events_ignored() {
        assert_eq!(InputMapper::map_window_event(&WindowEvent::Focused(true)), None);
        assert_eq!(InputMapper::map_window_event(&WindowEvent::Destroyed), None);
    }

    #[test]
    fn test_handler_starts_running() {
        assert!(!InputHandler::new().quit_requested());
    }

    #[test]
    fn test_handler_quit_is_sticky() {
        let mut input = InputHandler::new();
        input.apply(InputAction::Quit);
        assert!(input.quit_requested());

        input.handle_window_event(&WindowEvent::Focused(false));
        assert!(input.quit_requested());
    }

    #[test]
    fn test_handler_close_request() {
        let mut input = InputHandler::new();
        let action = input.handle_window_event(&WindowEvent::CloseRequested);
        assert_eq!(action, Some(InputAction::Quit));
        assert!(input.quit_requested());
    }
}
