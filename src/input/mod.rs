//! Input handling module
//!
//! Maps raw window events to semantic actions and keeps the resulting
//! application state (currently only the quit request).

mod input_mapper;

pub use input_mapper::{InputAction, InputHandler, InputMapper};
