//! # Models Module
//!
//! Data structures describing the simulated particles.
//!
//! - [`particle`] - A single point particle with position, velocity and acceleration
//! - [`system`] - The ordered particle collection together with its mass and box

pub mod particle;
pub mod system;
