use clap::ValueEnum;
use cubeview_client::{
    ClientConfig, CubeService, HttpCubeService, LocalCubeService, Prediction, ServiceError,
};
use cubeview_common::{CubeState, Move};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendKind {
    /// Remote cube service over HTTP
    Http,
    /// In-process cube kernel (no move prediction)
    Local,
}

/// Whichever service the command line picked.
#[derive(Debug)]
pub enum Backend {
    Http(HttpCubeService),
    Local(LocalCubeService),
}

impl Backend {
    pub fn build(kind: BackendKind, config: &ClientConfig, seed: u64) -> Result<Self, ServiceError> {
        Ok(match kind {
            BackendKind::Http => Backend::Http(HttpCubeService::new(config)?),
            BackendKind::Local => Backend::Local(LocalCubeService::new(seed)),
        })
    }
}

impl CubeService for Backend {
    async fn scramble(&self, moves: u32) -> Result<CubeState, ServiceError> {
        match self {
            Backend::Http(s) => s.scramble(moves).await,
            Backend::Local(s) => s.scramble(moves).await,
        }
    }

    async fn rotate(&self, state: &CubeState, mv: Move) -> Result<CubeState, ServiceError> {
        match self {
            Backend::Http(s) => s.rotate(state, mv).await,
            Backend::Local(s) => s.rotate(state, mv).await,
        }
    }

    async fn predict_move(&self, state: &CubeState) -> Result<Prediction, ServiceError> {
        match self {
            Backend::Http(s) => s.predict_move(state).await,
            Backend::Local(s) => s.predict_move(state).await,
        }
    }
}
