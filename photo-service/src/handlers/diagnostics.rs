use crate::dtos::{CollectionCounts, SchemaInfoResponse};
use crate::services::CollectionKind;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use service_core::error::AppError;

const DEFAULT_MODE: &str = "info";

/// `GET /test`: same as `/test/info`.
pub async fn schema_info(State(state): State<AppState>) -> Result<Response, AppError> {
    run(&state, DEFAULT_MODE).await
}

/// `GET /test/:mode` where mode is `info` or `counts`.
pub async fn schema_diagnostics(
    State(state): State<AppState>,
    Path(mode): Path<String>,
) -> Result<Response, AppError> {
    run(&state, &mode).await
}

async fn run(state: &AppState, mode: &str) -> Result<Response, AppError> {
    tracing::info!(mode = %mode, "/test called");

    match mode {
        "info" => Ok(Json(fetch_schema_info(state).await?).into_response()),
        "counts" => Ok(Json(count_collections(state).await?).into_response()),
        other => Err(AppError::bad_request(format!("Bad param {}", other))),
    }
}

async fn fetch_schema_info(state: &AppState) -> Result<SchemaInfoResponse, AppError> {
    let info = state
        .store
        .find_schema_info()
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::internal("Missing SchemaInfo"))?;

    tracing::debug!(version = %info.version, "SchemaInfo loaded");
    Ok(SchemaInfoResponse::from(info))
}

/// The three counts run concurrently; the first failure discards the rest.
async fn count_collections(state: &AppState) -> Result<CollectionCounts, AppError> {
    let store = &state.store;
    let (user, photo, schema_info) = tokio::try_join!(
        store.count(CollectionKind::User),
        store.count(CollectionKind::Photo),
        store.count(CollectionKind::SchemaInfo),
    )?;

    Ok(CollectionCounts {
        user,
        photo,
        schema_info,
    })
}
