//! # Workflows Module
//!
//! High-level entry points that drive a complete simulation run without a renderer.
//!
//! ## Overview
//!
//! A workflow owns the frame loop: it creates the [`Simulation`](crate::engine::simulation::Simulation)
//! session from a configuration, advances it frame by frame, forwards selected frames
//! to output sinks and reports progress along the way. Drivers that need to own the
//! loop themselves (an interactive viewer, for example) should use the session
//! directly instead.
//!
//! - **Run Workflow** ([`run`]) - Fixed-length headless run with cooperative stop,
//!   frame recording, and energy drift tracking.

pub mod run;
