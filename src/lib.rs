//! Kepler - orbit renderer
//!
//! Draws a satellite tracing a Kepler orbit about a fixed focus, leaving a
//! trail on a canvas that is never cleared.
//!
//! The binary is a thin wrapper: parse the command line with [`cli::Cli`],
//! then hand the result to [`app::run_cli`].

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod systems;
