use crate::thumbnails::errors::PipelineError;
use serde::{Deserialize, Serialize};

/// Fields are optional so that a missing one is reported by the pipeline like any other failure.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationRequest {
    pub bucket: Option<String>,
    pub key: Option<String>,
}

impl InvocationRequest {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: Some(bucket.into()),
            key: Some(key.into()),
        }
    }

    /// Returns `(bucket, key)` once both are present and non-empty.
    pub fn source(&self) -> Result<(&str, &str), PipelineError> {
        let bucket = required(self.bucket.as_deref(), "bucket")?;
        let key = required(self.key.as_deref(), "key")?;
        Ok((bucket, key))
    }
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, PipelineError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(PipelineError::MissingField(field))
}
