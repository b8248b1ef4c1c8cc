use cubeview_common::CubeError;

/// Errors from cube service calls.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("rejected service data: {0}")]
    Cube(#[from] CubeError),
    #[error("{0} is not supported by this backend")]
    Unsupported(&'static str),
}
