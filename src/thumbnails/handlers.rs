use crate::app_context::AppContext;
use crate::thumbnails::errors::PipelineError;
use crate::thumbnails::requests::InvocationRequest;
use crate::thumbnails::responses::InvocationResponse;
use crate::thumbnails::storage::ObjectStore;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Json;

/// Invocation entry point. Always answers with a well-formed result, malformed payloads included.
pub async fn invoke<S: ObjectStore + 'static>(
    State(app_context): State<AppContext<S>>,
    payload: Result<Json<InvocationRequest>, JsonRejection>,
) -> Json<InvocationResponse> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let err = PipelineError::InvalidRequest(rejection.body_text());
            tracing::warn!(task = "thumbnail", error = %err, "Rejected invocation payload.");
            return Json(InvocationResponse::Error {
                message: err.to_string(),
            });
        }
    };
    let result = app_context.pipeline.process(request).await;
    Json(result.into())
}
