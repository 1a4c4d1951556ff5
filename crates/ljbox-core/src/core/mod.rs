//! # Core Module
//!
//! Stateless building blocks of the simulation: the particle data model, the
//! Lennard-Jones and soft-wall force field, energy diagnostics, and frame output.
//!
//! ## Architecture
//!
//! - **Particle Representation** ([`models`]) - Particles and the confined particle system
//! - **Interactions** ([`forcefield`]) - Physical parameters, scalar potentials, and force evaluation
//! - **Monitoring** ([`diagnostics`]) - Kinetic and clamped potential energy
//! - **Output** ([`io`]) - Frame sinks for trajectories and energy logs
//!
//! Nothing in this module owns mutable simulation state; every function either reads a
//! [`models::system::ParticleSystem`] or returns freshly computed values.

pub mod diagnostics;
pub mod forcefield;
pub mod io;
pub mod models;
