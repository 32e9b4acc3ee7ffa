//! Ringside Core - Match configuration and controller input types
//!
//! This crate provides the value types shared by the match driver and the
//! simulation loop:
//! - Seven-button controller input state
//! - Player sides and control device kinds
//! - Launch state, automation flags and the combined launch configuration
//! - Error types for configuration

pub mod device;
pub mod error;
pub mod input;
pub mod launch;
pub mod side;

// Re-exports for convenient access
pub use device::DeviceType;
pub use error::{LaunchError, Result};
pub use input::{Button, InputState};
pub use launch::{AutomationFlags, LaunchConfig, LaunchState};
pub use side::Side;
