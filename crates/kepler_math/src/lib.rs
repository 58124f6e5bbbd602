//! Orbit mathematics
//!
//! This crate holds the pure scalar side of the simulation: no windowing,
//! no GPU and no clocks.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector in pixel space
//! - [`OrbitParams`] - eccentricity and semi-major axis of a conic orbit
//! - [`KeplerOrbit`] - a satellite advanced along the polar orbit equation

mod vec2;
pub mod orbit;

pub use vec2::Vec2;
pub use orbit::{nonzero, KeplerOrbit, OrbitParams, ANGULAR_STEP, DENOMINATOR_EPSILON};
