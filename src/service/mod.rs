//! HTTP endpoint exposing the per-drug pathway count.
//!
//! ```text
//! POST /drug_count  {"drug": "Lepirudin"}
//!   200 {"drug": "Lepirudin", "pathway_count": 2}
//!   404 {"detail": "Drug not found"}
//!   500 {"detail": "<reason>"}
//! ```
//!
//! The export is re-read on every request; no state is shared between
//! requests beyond the configured path.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::{DrugbankError, Result};
use crate::extract::Extractor;
use crate::tables::{pathway_count_for, pathway_drug_counts, pathway_spec};
use crate::tree::{Document, Namespace};

/// State shared with the handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub input: Arc<PathBuf>,
    /// Overrides the namespace declared in the export.
    pub namespace: Option<Namespace>,
}

impl AppState {
    pub fn new(input: impl Into<PathBuf>, namespace: Option<Namespace>) -> Self {
        Self {
            input: Arc::new(input.into()),
            namespace,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DrugRequest {
    pub drug: String,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugCount {
    pub drug: String,
    pub pathway_count: usize,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

/// Error half of a handler result.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl From<DrugbankError> for ApiError {
    fn from(e: DrugbankError) -> Self {
        if e.is_not_found() {
            Self {
                status: StatusCode::NOT_FOUND,
                detail: "Drug not found".to_string(),
            }
        } else {
            Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                detail: e.to_string(),
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}

/// Build the axum router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/drug_count", post(handle_drug_count))
        .with_state(state)
}

/// Number of distinct pathways `drug` (by name) takes part in.
pub fn drug_pathway_count(input: &Path, namespace: Option<&Namespace>, drug: &str) -> Result<usize> {
    let document = Document::from_path(input)?;
    let ns = namespace.cloned().unwrap_or_else(|| Namespace::of(&document));
    let pathways = Extractor::new(ns).run(&document, &pathway_spec());
    pathway_count_for(&pathway_drug_counts(&pathways), drug)
}

async fn handle_drug_count(
    State(state): State<AppState>,
    Json(request): Json<DrugRequest>,
) -> std::result::Result<Json<DrugCount>, ApiError> {
    let drug = request.drug;
    let lookup = drug.clone();
    let count = tokio::task::spawn_blocking(move || {
        drug_pathway_count(&state.input, state.namespace.as_ref(), &lookup)
    })
    .await
    .map_err(|e| ApiError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        detail: e.to_string(),
    })?;

    match count {
        Ok(pathway_count) => Ok(Json(DrugCount {
            drug,
            pathway_count,
        })),
        Err(e) => {
            tracing::debug!(drug = %drug, error = %e, "drug_count lookup failed");
            Err(e.into())
        }
    }
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: &str, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
