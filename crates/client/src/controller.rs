use crate::error::ServiceError;
use crate::service::{CubeService, Prediction};
use cubeview_common::{CubeState, Move};
use cubeview_state::{CubeStore, CubeStream};

/// Front door for UI actions: calls the service, then publishes the result.
///
/// The controller owns the store, which makes it the store's only writer.
/// On a service error the stored state is left as it was.
#[derive(Debug)]
pub struct CubeController<S> {
    service: S,
    store: CubeStore,
    scramble_moves: u32,
}

impl<S: CubeService> CubeController<S> {
    /// Start from the solved cube.
    pub fn new(service: S, scramble_moves: u32) -> Self {
        Self::with_store(service, CubeStore::new(), scramble_moves)
    }

    pub fn with_store(service: S, store: CubeStore, scramble_moves: u32) -> Self {
        Self {
            service,
            store,
            scramble_moves,
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn state(&self) -> CubeState {
        self.store.current()
    }

    pub fn subscribe(&self) -> CubeStream {
        self.store.subscribe()
    }

    /// Scramble with the configured move count.
    pub async fn scramble(&self) -> Result<CubeState, ServiceError> {
        self.scramble_with(self.scramble_moves).await
    }

    pub async fn scramble_with(&self, moves: u32) -> Result<CubeState, ServiceError> {
        let state = self.service.scramble(moves).await?;
        tracing::info!(moves, "cube scrambled");
        self.store.set(state.clone());
        Ok(state)
    }

    pub async fn rotate(&self, mv: Move) -> Result<CubeState, ServiceError> {
        let state = self.service.rotate(&self.store.current(), mv).await?;
        tracing::info!(%mv, solved = state.is_solved(), "cube rotated");
        self.store.set(state.clone());
        Ok(state)
    }

    /// Ask for a suggested move without applying it.
    pub async fn predict_move(&self) -> Result<Prediction, ServiceError> {
        let prediction = self.service.predict_move(&self.store.current()).await?;
        tracing::info!(mv = %prediction.mv, confidence = ?prediction.confidence, "move predicted");
        Ok(prediction)
    }

    /// Predict a move and apply it.
    pub async fn apply_prediction(&self) -> Result<(Prediction, CubeState), ServiceError> {
        let prediction = self.predict_move().await?;
        let state = self.rotate(prediction.mv).await?;
        Ok((prediction, state))
    }

    /// Back to solved, locally.
    pub fn reset(&self) -> CubeState {
        tracing::info!("cube reset");
        self.store.reset();
        self.store.current()
    }
}
