//! ipdisc-core
//!
//! Core library for enumerating the hardware IP blocks of AMD GPUs.
//!
//! Modern amdgpu kernels expose an `ip_discovery` tree under each DRM
//! card's sysfs device directory. This crate walks that tree and turns it
//! into a flat list of IP records (name, version, base address), leaving
//! all presentation decisions to frontends.
//!
//! The goal is to keep all substantive logic here so it is fully testable
//! against simulated sysfs trees, without real hardware.

pub mod discovery;
pub mod model;
pub mod report;
pub mod sysfs;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
