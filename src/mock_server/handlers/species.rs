//! Species endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;

/// Page size used when `limit` is omitted, matching the live API.
const DEFAULT_LIMIT: usize = 20;

/// Query parameters for listing species.
#[derive(Debug, Default, Deserialize)]
pub struct ListSpeciesQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// A named reference to a species.
#[derive(Debug, Serialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Response for listing species.
#[derive(Debug, Serialize)]
pub struct ListSpeciesResponse {
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Response for a single species.
#[derive(Debug, Serialize)]
pub struct SpeciesResponse {
    pub id: u32,
    pub name: String,
}

/// GET /pokemon-species
pub async fn list_species(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(query): Query<ListSpeciesQuery>,
) -> impl IntoResponse {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let offset = query.offset.unwrap_or(0);

    let state = state.read().await;
    let count = state.count();

    let results = state
        .list(offset, limit)
        .into_iter()
        .map(|(id, name)| NamedResource {
            name: name.to_string(),
            url: format!("/pokemon-species/{id}/"),
        })
        .collect();

    let next_offset = offset.saturating_add(limit);
    let next = (limit > 0 && next_offset < count)
        .then(|| format!("/pokemon-species?offset={next_offset}&limit={limit}"));
    let previous = (offset > 0).then(|| {
        format!(
            "/pokemon-species?offset={}&limit={limit}",
            offset.saturating_sub(limit)
        )
    });

    Json(ListSpeciesResponse {
        count,
        next,
        previous,
        results,
    })
}

/// GET /pokemon-species/:id
pub async fn get_species(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<u32>,
) -> impl IntoResponse {
    let state = state.read().await;

    match state.get_species(id) {
        Some(name) => (
            StatusCode::OK,
            Json(SpeciesResponse {
                id,
                name: name.to_string(),
            }),
        )
            .into_response(),
        // The live API answers unknown ids with a plain-text body
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}
