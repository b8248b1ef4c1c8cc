use crate::error::ServiceError;
use cubeview_common::{CubeState, Move};
use std::fmt;
use std::future::Future;

/// A suggested next move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub mv: Move,
    /// Service confidence in 0..=1, when it reports one.
    pub confidence: Option<f32>,
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.confidence {
            Some(c) => write!(f, "{} ({:.1}%)", self.mv, c * 100.0),
            None => write!(f, "{}", self.mv),
        }
    }
}

/// Cube mechanics provider: the remote service or an in-process stand-in.
///
/// Implementations never touch the state store; the controller does that.
pub trait CubeService {
    /// A freshly scrambled cube, `moves` random turns from solved.
    fn scramble(&self, moves: u32) -> impl Future<Output = Result<CubeState, ServiceError>> + Send;

    /// `state` with `mv` applied.
    fn rotate(
        &self,
        state: &CubeState,
        mv: Move,
    ) -> impl Future<Output = Result<CubeState, ServiceError>> + Send;

    /// Suggested next move for `state`.
    fn predict_move(
        &self,
        state: &CubeState,
    ) -> impl Future<Output = Result<Prediction, ServiceError>> + Send;
}
