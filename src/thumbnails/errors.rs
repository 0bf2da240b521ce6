use crate::thumbnails::storage::StorageError;
use image::ImageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("invalid invocation payload: {0}")]
    InvalidRequest(String),
    #[error("failed to fetch the source image: {0}")]
    Fetch(#[source] StorageError),
    #[error("failed to decode the source image: {0}")]
    Decode(#[source] ImageError),
    #[error("failed to encode the thumbnail: {0}")]
    Encode(#[source] ImageError),
    #[error("image processing task failed: {0}")]
    Processing(String),
    #[error("failed to store the thumbnail: {0}")]
    Store(#[source] StorageError),
}
