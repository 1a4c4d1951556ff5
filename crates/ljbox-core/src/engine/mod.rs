//! # Engine Module
//!
//! Stateful machinery that turns a configuration into a running simulation.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Run parameters, the builder, and fail-fast validation
//! - **Initialization** ([`init`]) - Random initial state from a seeded or injected source
//! - **Integration** ([`integrator`]) - The velocity-Verlet time stepper
//! - **Session** ([`simulation`]) - Frame-by-frame advancement with cooperative stop
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Engine-level error type
//!
//! The engine is single-threaded. Each frame runs its sub-steps to completion before
//! returning, and the only state shared with other contexts is the stop flag.

pub mod config;
pub mod error;
pub mod init;
pub mod integrator;
pub mod progress;
pub mod simulation;
