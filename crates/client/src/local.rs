use crate::error::ServiceError;
use crate::service::{CubeService, Prediction};
use cubeview_common::{CubeState, Move};
use cubeview_kernel::Cube;
use std::sync::Mutex;

/// In-process backend running the local cube kernel.
///
/// Scrambles are reproducible: the seed advances on every call, so two
/// services built with the same seed hand out the same sequence. Move
/// prediction is not available offline.
#[derive(Debug, Default)]
pub struct LocalCubeService {
    seed: Mutex<u64>,
}

impl LocalCubeService {
    pub fn new(seed: u64) -> Self {
        Self {
            seed: Mutex::new(seed),
        }
    }

    fn next_scramble(&self, moves: u32) -> CubeState {
        let mut seed = self.seed.lock().unwrap_or_else(|e| e.into_inner());
        let mut cube = Cube::with_seed(*seed);
        cube.scramble(moves);
        *seed = cube.seed();
        cube.into_state()
    }
}

impl CubeService for LocalCubeService {
    async fn scramble(&self, moves: u32) -> Result<CubeState, ServiceError> {
        Ok(self.next_scramble(moves))
    }

    async fn rotate(&self, state: &CubeState, mv: Move) -> Result<CubeState, ServiceError> {
        let mut cube = Cube::from_state(state.clone())?;
        cube.apply(mv);
        Ok(cube.into_state())
    }

    async fn predict_move(&self, _state: &CubeState) -> Result<Prediction, ServiceError> {
        Err(ServiceError::Unsupported("move prediction"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubeview_common::{CubeError, Face};

    #[tokio::test]
    async fn scramble_sequence_follows_seed() {
        let a = LocalCubeService::new(7);
        let b = LocalCubeService::new(7);
        let first = a.scramble(20).await.unwrap();
        assert_eq!(first, b.scramble(20).await.unwrap());
        assert!(first.validate().is_ok());
        assert_ne!(first, a.scramble(20).await.unwrap());
    }

    #[tokio::test]
    async fn zero_move_scramble_is_solved() {
        let s = LocalCubeService::new(1).scramble(0).await.unwrap();
        assert!(s.is_solved());
    }

    #[tokio::test]
    async fn rotate_then_inverse() {
        let svc = LocalCubeService::default();
        let mv = Move::cw(Face::Left);
        let turned = svc.rotate(&CubeState::solved(), mv).await.unwrap();
        assert!(!turned.is_solved());
        let back = svc.rotate(&turned, mv.inverse()).await.unwrap();
        assert!(back.is_solved());
    }

    #[tokio::test]
    async fn rotate_rejects_malformed_state() {
        let svc = LocalCubeService::default();
        let err = svc
            .rotate(&CubeState::from_facelets(vec![0; 10]), Move::cw(Face::Up))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Cube(CubeError::InvalidLength { actual: 10, .. })
        ));
    }

    #[tokio::test]
    async fn predict_is_unsupported() {
        let err = LocalCubeService::default()
            .predict_move(&CubeState::solved())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Unsupported(_)));
    }
}
