//! # Force Field Module
//!
//! Interactions acting on the particles of a [`ParticleSystem`](crate::core::models::system::ParticleSystem):
//!
//! - **Lennard-Jones pair forces** with per-pair force-magnitude capping
//! - **Soft walls** applying a linear inward restoring force near each face of the box
//!
//! ## Key Components
//!
//! - [`params`] - The immutable physical parameters of a run
//! - [`potentials`] - Pure scalar potential, force and capping functions
//! - [`field`] - The [`field::ForceField`] that turns positions into per-particle forces
//!
//! ```ignore
//! use ljbox::core::forcefield::field::ForceField;
//!
//! let field = ForceField::new(&params, system.box_size());
//! let forces = field.compute_forces(&system.positions());
//! ```

pub mod field;
pub mod params;
pub mod potentials;
