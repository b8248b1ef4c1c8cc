//! JSON bodies exchanged with the cube service.

use cubeview_common::{CubeState, Move};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ScrambleRequest {
    pub moves: u32,
}

#[derive(Debug, Serialize)]
pub struct RotateRequest<'a> {
    pub state: &'a CubeState,
    #[serde(rename = "move")]
    pub mv: Move,
}

#[derive(Debug, Serialize)]
pub struct StateRequest<'a> {
    pub state: &'a CubeState,
}

#[derive(Debug, Deserialize)]
pub struct StateResponse {
    pub state: CubeState,
}

/// The move stays a raw token here so an unknown token surfaces as a
/// cube error rather than a decode failure.
#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    #[serde(rename = "move")]
    pub mv: String,
    #[serde(default)]
    pub confidence: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    #[serde(default)]
    pub device: Option<String>,
}
