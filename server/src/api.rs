use axum::{
    body::Bytes,
    extract::{Json, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use canvaslift_core::types::{GenerationManifest, RemovalReport};
use canvaslift_core::{
    extract_component, generate_component, remove_component, LiftError, LiftResult,
};

use crate::AppContext;

type ApiError = (StatusCode, Json<serde_json::Value>);

// ---------------------------------------------------------------------------
// Request parsing and error normalization
// ---------------------------------------------------------------------------

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRequest {
    #[serde(default)]
    pub component_id: Option<String>,
}

fn failure(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(serde_json::json!({ "success": false, "error": message.into() })))
}

fn lift_failure(e: &LiftError) -> ApiError {
    match e {
        LiftError::InvalidIdentifier(_) => failure(StatusCode::BAD_REQUEST, "Invalid componentId"),
        LiftError::DocumentNotFound(_) | LiftError::BranchNotFound(_) => {
            failure(StatusCode::NOT_FOUND, e.to_string())
        }
        LiftError::ServiceUnavailable { .. } => {
            failure(StatusCode::SERVICE_UNAVAILABLE, e.to_string())
        }
        _ => {
            error!(error = %e, "Request failed");
            failure(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// Pull `componentId` out of a JSON body. A missing, empty or malformed body
/// reads as a request without an id.
fn component_id(body: &[u8]) -> Result<String, ApiError> {
    let req: ComponentRequest = if body.is_empty() {
        ComponentRequest::default()
    } else {
        serde_json::from_slice(body).unwrap_or_else(|e| {
            warn!(error = %e, "Malformed request body");
            ComponentRequest::default()
        })
    };
    match req.component_id {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(failure(StatusCode::BAD_REQUEST, "componentId required")),
    }
}

/// Run a core operation on the blocking pool, folding a panicked task into
/// the same error shape as a failed one.
async fn run_blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> LiftResult<T> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(lift_failure(&e)),
        Err(e) => {
            error!(error = %e, "Blocking task failed");
            Err(failure(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

pub async fn api_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(flatten)]
    pub manifest: GenerationManifest,
}

pub async fn api_generate(
    State(ctx): State<AppContext>,
    body: Bytes,
) -> Result<Json<GenerateResponse>, ApiError> {
    let id = component_id(&body)?;
    let config = ctx.config.clone();
    let manifest = run_blocking(move || generate_component(&config, &id)).await?;
    Ok(Json(GenerateResponse { success: true, manifest }))
}

// ---------------------------------------------------------------------------
// Removal
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    #[serde(flatten)]
    pub report: RemovalReport,
}

pub async fn api_delete(
    State(ctx): State<AppContext>,
    body: Bytes,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = component_id(&body)?;
    let config = ctx.config.clone();
    let report = run_blocking(move || remove_component(&config, &id)).await?;
    Ok(Json(DeleteResponse { success: true, report }))
}

// ---------------------------------------------------------------------------
// Extraction only
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ExtractResponse {
    pub success: bool,
    pub source: String,
}

pub async fn api_extract(
    State(ctx): State<AppContext>,
    body: Bytes,
) -> Result<Json<ExtractResponse>, ApiError> {
    let id = component_id(&body)?;
    let page = ctx.config.canvas_page_path();
    let source = run_blocking(move || extract_component(&id, &page)).await?;
    Ok(Json(ExtractResponse { success: true, source }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_id_parsing() {
        assert_eq!(component_id(br#"{"componentId":"card"}"#).unwrap(), "card");
        assert_eq!(component_id(b"").unwrap_err().0, StatusCode::BAD_REQUEST);
        assert_eq!(component_id(b"{}").unwrap_err().0, StatusCode::BAD_REQUEST);
        assert_eq!(component_id(br#"{"componentId":""}"#).unwrap_err().0, StatusCode::BAD_REQUEST);
        assert_eq!(component_id(b"not json").unwrap_err().0, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_lift_failure_status_codes() {
        let (status, Json(body)) = lift_failure(&LiftError::InvalidIdentifier("!!".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid componentId");
        assert_eq!(body["success"], false);

        let (status, _) = lift_failure(&LiftError::BranchNotFound("x".into()));
        assert_eq!(status, StatusCode::NOT_FOUND);

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let (status, Json(body)) =
            lift_failure(&LiftError::WriteFailure { path: "a.tsx".into(), source: io });
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("denied"));
    }

    #[tokio::test]
    async fn test_panicked_task_is_normalized() {
        let err = run_blocking::<(), _>(|| panic!("boom")).await.unwrap_err();
        assert_eq!(err.0, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.1 .0["success"], false);
    }
}
