//! Driver loop tests against a scripted frontend
//!
//! The frontend records every call so the tests can check ordering and the
//! frame on which a quit takes effect.

use std::time::Duration;

use kepler::app::{drive, run_loop, simulation_for, Frontend};
use kepler::config::AppConfig;
use kepler::input::{InputAction, InputHandler, InputMapper};
use kepler::systems::{FramePacer, RenderError};
use kepler_math::Vec2;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Call {
    Draw(Vec2, Vec2),
    Poll,
    Teardown,
}

/// Input delivered on a given poll (1-based)
enum Scripted {
    Escape,
    Close,
    Unrelated,
}

#[derive(Default)]
struct ScriptedFrontend {
    calls: Vec<Call>,
    script: Vec<(usize, Scripted)>,
    polls: usize,
    fail_on_draw: Option<usize>,
}

impl ScriptedFrontend {
    fn with_input(poll: usize, input: Scripted) -> Self {
        Self {
            script: vec![(poll, input)],
            ..Default::default()
        }
    }

    fn draws(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Call::Draw(..))).count()
    }

    fn teardowns(&self) -> usize {
        self.calls.iter().filter(|c| **c == Call::Teardown).count()
    }
}

impl Frontend for ScriptedFrontend {
    fn draw(&mut self, focus: Vec2, satellite: Vec2) -> Result<(), RenderError> {
        self.calls.push(Call::Draw(focus, satellite));
        if self.fail_on_draw == Some(self.draws()) {
            return Err(RenderError::OutOfMemory);
        }
        Ok(())
    }

    fn poll_input(&mut self, input: &mut InputHandler) {
        self.calls.push(Call::Poll);
        self.polls += 1;
        for (poll, event) in &self.script {
            if *poll != self.polls {
                continue;
            }
            match event {
                Scripted::Escape => {
                    if let Some(action) =
                        InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed)
                    {
                        input.apply(action);
                    }
                }
                Scripted::Close => {
                    input.handle_window_event(&WindowEvent::CloseRequested);
                }
                Scripted::Unrelated => {
                    input.handle_window_event(&WindowEvent::Focused(true));
                }
            }
        }
    }

    fn teardown(&mut self) {
        self.calls.push(Call::Teardown);
    }
}

fn instant_pacer() -> FramePacer {
    FramePacer::with_budget(Duration::ZERO)
}

#[test]
fn test_escape_ends_loop_at_next_boundary() {
    let mut frontend = ScriptedFrontend::with_input(4, Scripted::Escape);
    let mut sim = simulation_for(&AppConfig::default());

    let frames = drive(&mut frontend, &mut sim, &mut instant_pacer()).unwrap();

    assert_eq!(frames, 4);
    assert_eq!(frontend.draws(), 4);
    assert_eq!(sim.ticks(), 4);
    assert_eq!(frontend.calls.last(), Some(&Call::Teardown));
}

#[test]
fn test_close_request_ends_loop() {
    let mut frontend = ScriptedFrontend::with_input(1, Scripted::Close);
    let mut sim = simulation_for(&AppConfig::default());

    let frames = drive(&mut frontend, &mut sim, &mut instant_pacer()).unwrap();

    assert_eq!(frames, 1);
    assert!(
        matches!(
            frontend.calls.as_slice(),
            [Call::Draw(..), Call::Poll, Call::Teardown]
        ),
        "got {:?}",
        frontend.calls
    );
}

#[test]
fn test_unrelated_events_keep_running() {
    let mut frontend = ScriptedFrontend {
        script: vec![(1, Scripted::Unrelated), (2, Scripted::Unrelated), (3, Scripted::Escape)],
        ..Default::default()
    };
    let mut sim = simulation_for(&AppConfig::default());

    let frames = drive(&mut frontend, &mut sim, &mut instant_pacer()).unwrap();
    assert_eq!(frames, 3);
}

#[test]
fn test_draw_precedes_poll_every_frame() {
    let mut frontend = ScriptedFrontend::with_input(5, Scripted::Escape);
    let mut sim = simulation_for(&AppConfig::default());
    let mut input = InputHandler::new();

    run_loop(&mut frontend, &mut sim, &mut instant_pacer(), &mut input).unwrap();

    for pair in frontend.calls.chunks(2) {
        assert!(matches!(pair, [Call::Draw(..), Call::Poll]), "got {:?}", pair);
    }
}

#[test]
fn test_each_frame_draws_updated_state() {
    let mut frontend = ScriptedFrontend::with_input(2, Scripted::Escape);
    let config = AppConfig::default();
    let mut sim = simulation_for(&config);

    let mut expected = simulation_for(&config);
    expected.update();
    let first = expected.satellite();
    expected.update();
    let second = expected.satellite();

    drive(&mut frontend, &mut sim, &mut instant_pacer()).unwrap();

    let focus = Vec2::new(400.0, 300.0);
    assert_eq!(frontend.calls[0], Call::Draw(focus, first));
    assert_eq!(frontend.calls[2], Call::Draw(focus, second));
}

#[test]
fn test_fatal_draw_error_still_tears_down() {
    let mut frontend = ScriptedFrontend {
        fail_on_draw: Some(2),
        ..Default::default()
    };
    let mut sim = simulation_for(&AppConfig::default());

    let result = drive(&mut frontend, &mut sim, &mut instant_pacer());

    assert!(result.is_err());
    assert_eq!(frontend.draws(), 2);
    assert_eq!(frontend.teardowns(), 1);
    assert_eq!(frontend.calls.last(), Some(&Call::Teardown));
}

#[test]
fn test_quit_before_first_frame() {
    let mut frontend = ScriptedFrontend::default();
    let mut sim = simulation_for(&AppConfig::default());
    let mut input = InputHandler::new();
    input.apply(InputAction::Quit);

    let frames = run_loop(&mut frontend, &mut sim, &mut instant_pacer(), &mut input).unwrap();
    assert_eq!(frames, 0);
    assert!(frontend.calls.is_empty());
}
