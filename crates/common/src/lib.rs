//! Shared types for the cubeview workspace.
//!
//! # Invariants
//! - Face indices follow the service contract: U, D, L, R, F, B.
//! - The face layout table is the single source of cube geometry.

pub mod geometry;
pub mod types;

pub use geometry::{FACE_LAYOUTS, FaceLayout, facelet_position, local_offset};
pub use types::{
    COLOR_COUNT, CubeError, CubeState, FACE_COUNT, FACELET_COUNT, FACELETS_PER_FACE, Face, Move,
    Transform, Turn,
};
