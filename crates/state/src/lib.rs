//! Cube state store: one current value, one writer, many subscribers.
//!
//! # Invariants
//! - The store always holds a value; it starts solved.
//! - `CubeStore::set` is the only mutation entry point.
//! - Subscribers see the latest value; intermediate values may be skipped.

mod store;

pub use store::{CubeStore, CubeStream};
