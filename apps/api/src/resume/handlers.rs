use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::resume::loader::project_value;
use crate::resume::projector::{project, EducationOrder, ProjectionConfig, ResumeView};
use crate::resume::render::render_markdown;
use crate::state::AppState;

/// Per-request overrides of the server's projection defaults.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectionQuery {
    pub max_recent: Option<i64>,
    pub education_order: Option<String>,
}

impl ProjectionQuery {
    fn resolve(&self, defaults: &ProjectionConfig) -> Result<ProjectionConfig, AppError> {
        let education_order = match &self.education_order {
            Some(raw) => raw.parse::<EducationOrder>()?,
            None => defaults.education_order,
        };
        Ok(ProjectionConfig {
            max_recent_experience: self.max_recent.or(defaults.max_recent_experience),
            education_order,
        })
    }
}

fn project_stored(state: &AppState, query: &ProjectionQuery) -> Result<ResumeView, AppError> {
    let config = query.resolve(&state.config.projection)?;
    debug!(?config, "Projecting stored resume");
    Ok(project(&state.record, &config)?)
}

/// GET /api/v1/resume
pub async fn handle_get_resume(
    State(state): State<AppState>,
    query: Result<Query<ProjectionQuery>, QueryRejection>,
) -> Result<Json<ResumeView>, AppError> {
    let Query(query) = query?;
    Ok(Json(project_stored(&state, &query)?))
}

/// GET /api/v1/resume/markdown
pub async fn handle_get_markdown(
    State(state): State<AppState>,
    query: Result<Query<ProjectionQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let view = project_stored(&state, &query)?;
    let body = render_markdown(&view, &state.config.resume_heading);
    Ok(([(header::CONTENT_TYPE, "text/markdown; charset=utf-8")], body))
}

/// POST /api/v1/resume/project
/// Projects a caller-supplied record instead of the stored one.
pub async fn handle_project(
    State(state): State<AppState>,
    query: Result<Query<ProjectionQuery>, QueryRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ResumeView>, AppError> {
    let Query(query) = query?;
    let Json(raw) = body?;
    let config = query.resolve(&state.config.projection)?;
    let view = project_value(&raw, &config).inspect_err(|e| debug!("Rejected record: {e}"))?;
    Ok(Json(view))
}
