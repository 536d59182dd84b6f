use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use uuid::Uuid;

use crate::{
    export::{Artifact, DOCUMENT_FILE_NAME, render_document},
    gemini::GeminiError,
    models::{ErrorBody, GenerationRequest, GenerationResult, StatusBody},
    pipeline::CodeGenerator,
};

/// Shortest description the form accepts.
pub const MIN_DESCRIPTION_LEN: usize = 10;

#[derive(Clone)]
pub struct AppState {
    pub generator: CodeGenerator,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Description must be at least 10 characters.")]
    InvalidDescription,
    #[error("Failed to process request")]
    Generation(#[from] GeminiError),
    #[error("Unknown artifact: {0}")]
    UnknownArtifact(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidDescription => StatusCode::BAD_REQUEST,
            ApiError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::UnknownArtifact(_) => StatusCode::NOT_FOUND,
        };
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

pub async fn generate_code(
    State(state): State<AppState>,
    Json(body): Json<GenerationRequest>,
) -> Result<Json<GenerationResult>, ApiError> {
    if body.description.trim().chars().count() < MIN_DESCRIPTION_LEN {
        return Err(ApiError::InvalidDescription);
    }

    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, "🚀 Generating code for description ({} chars)", body.description.chars().count());

    match state.generator.generate_code(&body).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            tracing::error!(%request_id, "❌ Code generation failed: {}", e);
            Err(e.into())
        }
    }
}

pub async fn generator_status() -> Json<StatusBody> {
    Json(StatusBody {
        message: "Code generation API is ready. Use POST requests to generate code.".into(),
    })
}

pub async fn export_document(Json(body): Json<GenerationResult>) -> Response {
    attachment(DOCUMENT_FILE_NAME, "text/html", render_document(&body))
}

pub async fn export_artifact(
    Path(slug): Path<String>,
    Json(body): Json<GenerationResult>,
) -> Result<Response, ApiError> {
    let artifact = Artifact::from_slug(&slug).ok_or(ApiError::UnknownArtifact(slug))?;
    Ok(attachment(artifact.file_name(), artifact.mime_type(), artifact.contents(&body).to_string()))
}

fn attachment(file_name: &str, mime: &str, contents: String) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, format!("{mime}; charset=utf-8")),
            (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{file_name}\"")),
        ],
        contents,
    )
        .into_response()
}
