use crate::palette::{Palette, Rgb};
use cubeview_common::{CubeState, FACELETS_PER_FACE, Face, Transform, local_offset};
use glam::Vec3;

/// Tile sizing for the layout engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Distance between neighbouring tile centres.
    pub tile_pitch: f32,
    /// Gap subtracted from the pitch to get the visible tile size.
    pub inset: f32,
    /// Depth of each tile box.
    pub thickness: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            tile_pitch: 1.0,
            inset: 0.2,
            thickness: 0.1,
        }
    }
}

impl LayoutConfig {
    /// Visible edge length of a tile.
    pub fn tile_extent(&self) -> f32 {
        self.tile_pitch - self.inset
    }
}

/// One positioned, colored tile ready for a renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub face: Face,
    /// Row-major position on the face, 0..9.
    pub index: u8,
    /// Raw facelet value the color was looked up from.
    pub facelet: u8,
    pub color: Rgb,
    /// World placement; `scale` holds the tile box dimensions.
    pub transform: Transform,
}

/// Lay out facelets as squares: face-major, then row, then column.
///
/// Only whole faces are laid out, at most six: a trailing partial face is
/// dropped and nothing is reported. Values outside the palette get
/// [`Palette::UNMAPPED`].
pub fn layout_squares(facelets: &[u8], palette: &Palette, config: &LayoutConfig) -> Vec<Square> {
    let extent = config.tile_extent();
    let scale = Vec3::new(extent, extent, config.thickness);
    let mut squares = Vec::with_capacity(facelets.len());

    for (&face, values) in Face::ALL.iter().zip(facelets.chunks_exact(FACELETS_PER_FACE)) {
        let layout = face.layout();
        let rotation = layout.rotation();
        for (j, &value) in values.iter().enumerate() {
            let offset = local_offset(j / 3, j % 3) * config.tile_pitch;
            squares.push(Square {
                face,
                index: j as u8,
                facelet: value,
                color: palette.entry(value).rgb,
                transform: Transform {
                    position: layout.origin + rotation * offset,
                    rotation,
                    scale,
                },
            });
        }
    }
    squares
}

/// Palette and tile config bundled for repeated layouts.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    palette: Palette,
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(palette: Palette, config: LayoutConfig) -> Self {
        Self { palette, config }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn layout(&self, state: &CubeState) -> Vec<Square> {
        layout_squares(state.facelets(), &self.palette, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubeview_common::FACE_COUNT;

    const EPS: f32 = 1e-5;

    fn lay(facelets: &[u8]) -> Vec<Square> {
        layout_squares(facelets, &Palette::default(), &LayoutConfig::default())
    }

    #[test]
    fn square_count_is_nine_per_face() {
        for k in 0..=FACE_COUNT {
            let facelets: Vec<u8> = (0..9 * k).map(|i| (i % 6) as u8).collect();
            assert_eq!(lay(&facelets).len(), 9 * k);
        }
    }

    #[test]
    fn empty_and_partial_faces_yield_nothing() {
        assert!(lay(&[]).is_empty());
        assert!(lay(&[0; 8]).is_empty());
        assert_eq!(lay(&[0; 17]).len(), 9);
    }

    #[test]
    fn faces_past_the_sixth_are_dropped() {
        assert_eq!(lay(&[0; 63]).len(), 54);
    }

    #[test]
    fn solved_faces_share_color_and_rotation() {
        let palette = Palette::default();
        let squares = lay(CubeState::solved().facelets());
        for sq in &squares {
            let layout = sq.face.layout();
            assert_eq!(sq.color, palette.entry(sq.face.index() as u8).rgb);
            assert!(sq.transform.rotation.abs_diff_eq(layout.rotation(), EPS));

            let rel = sq.transform.position - layout.origin;
            assert!(rel.dot(layout.normal()).abs() < EPS, "{:?}", sq);
            assert!(rel.abs().max_element() <= 1.0 + EPS, "{:?}", sq);
        }
    }

    #[test]
    fn uniform_faces_map_to_palette_groups() {
        let squares = lay(CubeState::solved().facelets());
        let expected = [0xFFFFFF, 0xFFFF00, 0x00FF00, 0x0000FF, 0xFFA500, 0xFF0000];
        for (group, color) in squares.chunks(9).zip(expected) {
            assert!(group.iter().all(|sq| sq.color == Rgb(color)));
            let face = group[0].face;
            assert!(group.iter().all(|sq| sq.face == face));

            let layout = face.layout();
            for (j, sq) in group.iter().enumerate() {
                let want = layout.origin
                    + layout.rotation()
                        * Vec3::new((j % 3) as f32 - 1.0, 1.0 - (j / 3) as f32, 0.0);
                assert!(sq.transform.position.abs_diff_eq(want, EPS), "{face}{j}");
            }
        }
    }

    #[test]
    fn front_face_grid_positions() {
        let squares = lay(CubeState::solved().facelets());
        let front: Vec<Vec3> = squares
            .iter()
            .filter(|sq| sq.face == Face::Front)
            .map(|sq| sq.transform.position)
            .collect();
        let want = [
            Vec3::new(-1.0, 1.0, 1.5),
            Vec3::new(0.0, 1.0, 1.5),
            Vec3::new(1.0, 1.0, 1.5),
            Vec3::new(-1.0, 0.0, 1.5),
            Vec3::new(0.0, 0.0, 1.5),
            Vec3::new(1.0, 0.0, 1.5),
            Vec3::new(-1.0, -1.0, 1.5),
            Vec3::new(0.0, -1.0, 1.5),
            Vec3::new(1.0, -1.0, 1.5),
        ];
        for (got, want) in front.iter().zip(want) {
            assert!(got.abs_diff_eq(want, EPS), "{got} != {want}");
        }
    }

    #[test]
    fn centre_tile_sits_on_face_origin() {
        for sq in lay(CubeState::solved().facelets())
            .iter()
            .filter(|sq| sq.index == 4)
        {
            assert!(
                sq.transform
                    .position
                    .abs_diff_eq(sq.face.layout().origin, EPS)
            );
        }
    }

    #[test]
    fn layout_is_deterministic() {
        let facelets: Vec<u8> = (0..54).map(|i| ((i * 7) % 6) as u8).collect();
        let a = lay(&facelets);
        let b = lay(&facelets);
        assert_eq!(a, b);
    }

    #[test]
    fn output_order_is_face_then_row_then_column() {
        let squares = lay(CubeState::solved().facelets());
        for (i, sq) in squares.iter().enumerate() {
            assert_eq!(sq.face.index(), i / 9);
            assert_eq!(sq.index as usize, i % 9);
        }
    }

    #[test]
    fn out_of_palette_values_render_unmapped() {
        let mut facelets = vec![0u8; 9];
        facelets[3] = 9;
        let squares = lay(&facelets);
        assert_eq!(squares[3].color, Palette::UNMAPPED.rgb);
        assert_eq!(squares[3].facelet, 9);
    }

    #[test]
    fn tile_scale_uses_inset_and_thickness() {
        let config = LayoutConfig {
            tile_pitch: 2.0,
            inset: 0.5,
            thickness: 0.25,
        };
        let squares = layout_squares(&[0; 9], &Palette::default(), &config);
        assert_eq!(squares[0].transform.scale, Vec3::new(1.5, 1.5, 0.25));
        // Pitch scales the offset, not the face origin.
        assert!(
            squares[0]
                .transform
                .position
                .abs_diff_eq(Vec3::new(-2.0, 1.5, -2.0), EPS)
        );
    }

    #[test]
    fn engine_lays_out_cube_state() {
        let engine = LayoutEngine::default();
        assert_eq!(engine.layout(&CubeState::solved()).len(), 54);
        assert!((engine.config().tile_extent() - 0.8).abs() < EPS);
    }
}
