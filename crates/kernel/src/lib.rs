//! Cube Kernel: local face-turn mechanics, seeded scrambles, deterministic replay.
//!
//! # Invariants
//! - A cube always holds exactly 54 facelets with values in 0..6.
//! - All state mutations flow through explicit operations and are logged.
//! - Face turns are derived from the shared face layout table.

pub mod cube;

pub use cube::{Cube, CubeEvent};
