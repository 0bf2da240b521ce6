use crate::thumbnails::pipeline::PipelineResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum InvocationResponse {
    Success { file: String },
    Error { message: String },
}

impl InvocationResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<PipelineResult> for InvocationResponse {
    fn from(result: PipelineResult) -> Self {
        match result {
            PipelineResult::Success { output_key } => Self::Success {
                file: output_key.into_inner(),
            },
            PipelineResult::Failure { message } => Self::Error { message },
        }
    }
}
