//! Frame output for headless runs.
//!
//! A renderer is an external collaborator that reads positions after every frame. For
//! runs without one, this module provides sinks that persist recorded frames instead,
//! all behind the common [`traits::FrameSink`] interface.

pub mod energy_log;
pub mod traits;
pub mod xyz;
