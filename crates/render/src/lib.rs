//! Rendering Adapter: facelet layout engine and renderer-agnostic interface.
//!
//! # Invariants
//! - Layout is a pure function of the facelets, palette and layout config.
//! - A scene is rebuilt wholesale on every state change, never diffed.
//! - Renderers read a scene; they never touch cube state.

mod layout;
mod palette;
mod renderer;
mod scene;

pub use layout::{LayoutConfig, LayoutEngine, Square, layout_squares};
pub use palette::{Palette, PaletteEntry, Rgb};
pub use renderer::{DebugTextRenderer, NetTextRenderer, RenderView, Renderer};
pub use scene::Scene;
