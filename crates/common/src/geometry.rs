use crate::types::{FACE_COUNT, FACELETS_PER_FACE, Face};
use glam::{EulerRot, Quat, Vec3};
use std::f32::consts::{FRAC_PI_2, PI};

/// Fixed placement of one face: origin of its centre tile and its orientation.
///
/// The rotation is stored as XYZ Euler angles so the table can stay `const`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceLayout {
    pub origin: Vec3,
    pub euler: Vec3,
}

impl FaceLayout {
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.euler.x, self.euler.y, self.euler.z)
    }

    /// Outward normal: the face rotation applied to +Z.
    pub fn normal(&self) -> Vec3 {
        self.rotation() * Vec3::Z
    }
}

/// Face layout table, keyed by [`Face::index`].
pub const FACE_LAYOUTS: [FaceLayout; FACE_COUNT] = [
    // Up
    FaceLayout {
        origin: Vec3::new(0.0, 1.5, 0.0),
        euler: Vec3::new(-FRAC_PI_2, 0.0, 0.0),
    },
    // Down
    FaceLayout {
        origin: Vec3::new(0.0, -1.5, 0.0),
        euler: Vec3::new(FRAC_PI_2, 0.0, 0.0),
    },
    // Left
    FaceLayout {
        origin: Vec3::new(-1.5, 0.0, 0.0),
        euler: Vec3::new(0.0, -FRAC_PI_2, 0.0),
    },
    // Right
    FaceLayout {
        origin: Vec3::new(1.5, 0.0, 0.0),
        euler: Vec3::new(0.0, FRAC_PI_2, 0.0),
    },
    // Front
    FaceLayout {
        origin: Vec3::new(0.0, 0.0, 1.5),
        euler: Vec3::new(0.0, 0.0, 0.0),
    },
    // Back
    FaceLayout {
        origin: Vec3::new(0.0, 0.0, -1.5),
        euler: Vec3::new(0.0, -PI, 0.0),
    },
];

impl Face {
    pub fn layout(self) -> &'static FaceLayout {
        &FACE_LAYOUTS[self.index()]
    }
}

/// Unrotated offset of a tile from its face centre, one unit per tile.
pub fn local_offset(row: usize, col: usize) -> Vec3 {
    Vec3::new(col as f32 - 1.0, -(row as f32 - 1.0), 0.0)
}

/// World position of facelet `index` (0..9, row-major) on `face`.
pub fn facelet_position(face: Face, index: usize, pitch: f32) -> Vec3 {
    debug_assert!(index < FACELETS_PER_FACE);
    let layout = face.layout();
    let offset = local_offset(index / 3, index % 3) * pitch;
    layout.origin + layout.rotation() * offset
}
