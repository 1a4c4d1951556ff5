//! # LJ-Box Core Library
//!
//! A small, deterministic molecular-dynamics core for clusters of Lennard-Jones
//! particles confined to a cubic box by soft walls.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so that the numerical kernels stay
//! pure and easy to test, while stateful orchestration lives in one place.
//!
//! - **[`core`]: The Foundation.** Plain data models (`Particle`, `ParticleSystem`),
//!   the pure mathematical description of the interactions (`potentials`, `ForceField`),
//!   read-only energy diagnostics, and frame output sinks.
//!
//! - **[`engine`]: The Logic Core.** Configuration and validation, system
//!   initialization from an injectable random source, the velocity-Verlet integrator,
//!   and the `Simulation` session that advances the system frame by frame and honours
//!   cooperative stop requests.
//!
//! - **[`workflows`]: The Public API.** Headless end-to-end runs that tie the engine to
//!   progress reporting and output sinks. Renderers and other drivers that want to own
//!   the frame loop can use [`engine::simulation::Simulation`] directly.

pub mod core;
pub mod engine;
pub mod workflows;
