//! Developer Tooling: read-only cube inspection.

pub mod inspector;

pub use inspector::{CubeInspector, CubeSummary};
