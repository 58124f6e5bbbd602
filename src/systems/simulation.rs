//! Orbit simulation system
//!
//! Advances the orbit by exactly one angular step per frame. The step is not
//! scaled by elapsed time, so a slow frame slows the satellite down.

use kepler_math::{KeplerOrbit, OrbitParams, Vec2};

/// Owns the orbit model and counts ticks
pub struct SimulationSystem {
    orbit: KeplerOrbit,
    ticks: u64,
}

impl SimulationSystem {
    /// Create a simulation about `focus`, positioned at anomaly zero
    pub fn new(params: OrbitParams, focus: Vec2) -> Self {
        if !params.is_closed() {
            log::warn!(
                "Eccentricity {} does not describe a closed orbit",
                params.eccentricity
            );
        }
        if params.semi_major_axis <= 0.0 {
            log::warn!("Semi-major axis {} is not positive", params.semi_major_axis);
        }
        log::debug!(
            "Orbit e={} alpha={} p={}",
            params.eccentricity,
            params.semi_major_axis,
            params.semi_latus_rectum()
        );

        Self {
            orbit: KeplerOrbit::new(params, focus),
            ticks: 0,
        }
    }

    /// Run one simulation tick
    pub fn update(&mut self) {
        self.orbit.step();
        self.ticks += 1;
    }

    pub fn orbit(&self) -> &KeplerOrbit {
        &self.orbit
    }

    pub fn focus(&self) -> Vec2 {
        self.orbit.focus()
    }

    pub fn satellite(&self) -> Vec2 {
        self.orbit.position()
    }

    /// Ticks run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
