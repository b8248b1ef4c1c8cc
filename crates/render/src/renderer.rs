use crate::palette::Palette;
use crate::scene::Scene;
use cubeview_common::Face;
use glam::Vec3;
use std::fmt::Write;

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Viewport width over height.
    pub aspect: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            fov_degrees: 50.0,
            aspect: 1.0,
        }
    }
}

impl RenderView {
    /// Recompute the aspect ratio after a viewport resize. Zero heights are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads a scene and a view, then produces output. It never
/// mutates cube state; the store owns the truth.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of the given scene.
    fn render(&self, scene: &Scene, view: &RenderView) -> Self::Output;
}

/// Lists every square with its color and world position.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene, view: &RenderView) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Cube Scene (generation={}) ===", scene.generation());
        let _ = writeln!(out, "Squares: {}", scene.squares().len());
        let _ = writeln!(
            out,
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0} aspect={:.2}",
            view.eye.x,
            view.eye.y,
            view.eye.z,
            view.target.x,
            view.target.y,
            view.target.z,
            view.fov_degrees,
            view.aspect
        );

        for sq in scene.squares() {
            let p = sq.transform.position;
            let _ = writeln!(
                out,
                "  {}{} {} pos=({:.2}, {:.2}, {:.2})",
                sq.face, sq.index, sq.color, p.x, p.y, p.z
            );
        }

        out
    }
}

/// Draws the classic unfolded net with one palette symbol per facelet:
///
/// ```text
///       U
///     L F R B
///       D
/// ```
#[derive(Debug, Default)]
pub struct NetTextRenderer {
    palette: Palette,
}

const NET_ROWS: usize = 9;
const NET_COLS: usize = 12;

impl NetTextRenderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Top-left cell of each face in the net.
    fn anchor(face: Face) -> (usize, usize) {
        match face {
            Face::Up => (0, 3),
            Face::Left => (3, 0),
            Face::Front => (3, 3),
            Face::Right => (3, 6),
            Face::Back => (3, 9),
            Face::Down => (6, 3),
        }
    }
}

impl Renderer for NetTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene, _view: &RenderView) -> String {
        let mut grid = [[' '; NET_COLS]; NET_ROWS];
        for sq in scene.squares() {
            let (row, col) = Self::anchor(sq.face);
            let i = sq.index as usize;
            grid[row + i / 3][col + i % 3] = self.palette.entry(sq.facelet).symbol;
        }

        let mut out = String::new();
        for row in grid {
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            out.push_str(line.join(" ").trim_end());
            out.push('\n');
        }
        out
    }
}
