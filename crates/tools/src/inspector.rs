use cubeview_common::{COLOR_COUNT, CubeState, FACELETS_PER_FACE};
use std::fmt;

/// Cube state inspector for developer tooling.
///
/// Provides read-only queries for debugging malformed or unexpected states
/// coming back from a service.
pub struct CubeInspector;

impl CubeInspector {
    /// Produce a summary of a cube state. Works on partial states too.
    pub fn summary(state: &CubeState) -> CubeSummary {
        let facelets = state.facelets();
        let mut color_counts = [0usize; COLOR_COUNT];
        let mut unmapped = 0;
        for &v in facelets {
            match color_counts.get_mut(v as usize) {
                Some(count) => *count += 1,
                None => unmapped += 1,
            }
        }
        let uniform_faces = facelets
            .chunks_exact(FACELETS_PER_FACE)
            .filter(|face| face.iter().all(|&v| v == face[0]))
            .count();

        CubeSummary {
            facelets: facelets.len(),
            complete_faces: state.complete_faces(),
            uniform_faces,
            color_counts,
            unmapped,
            solved: state.is_solved(),
            valid: state.validate().is_ok(),
        }
    }
}

/// Summary of a cube state for the inspector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeSummary {
    pub facelets: usize,
    pub complete_faces: usize,
    /// Complete faces whose nine facelets all match.
    pub uniform_faces: usize,
    /// Facelets per palette value.
    pub color_counts: [usize; COLOR_COUNT],
    /// Facelets with values outside the palette.
    pub unmapped: usize,
    pub solved: bool,
    pub valid: bool,
}

impl CubeSummary {
    /// A valid cube that is scrambled still has nine of every color.
    pub fn balanced(&self) -> bool {
        self.color_counts.iter().all(|&c| c == FACELETS_PER_FACE) && self.unmapped == 0
    }
}

impl fmt::Display for CubeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cube: facelets={} faces={} uniform={} colors={:?} unmapped={} valid={} solved={}",
            self.facelets,
            self.complete_faces,
            self.uniform_faces,
            self.color_counts,
            self.unmapped,
            self.valid,
            self.solved
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_solved_cube() {
        let s = CubeInspector::summary(&CubeState::solved());
        assert_eq!(s.facelets, 54);
        assert_eq!(s.complete_faces, 6);
        assert_eq!(s.uniform_faces, 6);
        assert!(s.solved && s.valid && s.balanced());
    }

    #[test]
    fn summary_partial_state() {
        let s = CubeInspector::summary(&CubeState::from_facelets(vec![3; 13]));
        assert_eq!(s.complete_faces, 1);
        assert_eq!(s.uniform_faces, 1);
        assert_eq!(s.color_counts[3], 13);
        assert!(!s.valid);
        assert!(!s.solved);
    }

    #[test]
    fn summary_counts_unmapped_values() {
        let mut facelets = CubeState::solved().into_facelets();
        facelets[0] = 7;
        let s = CubeInspector::summary(&CubeState::from_facelets(facelets));
        assert_eq!(s.unmapped, 1);
        assert_eq!(s.color_counts[0], 8);
        assert_eq!(s.uniform_faces, 5);
        assert!(!s.valid);
        assert!(!s.balanced());
    }

    #[test]
    fn summary_display() {
        let s = format!("{}", CubeInspector::summary(&CubeState::solved()));
        assert!(s.contains("facelets=54"));
        assert!(s.contains("solved=true"));
    }
}
