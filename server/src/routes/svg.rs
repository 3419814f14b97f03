//! SVG inspection and mutation routes.
//!
//! ERROR HANDLING
//! ==============
//! Missing or blank `svg_code` is rejected before any parsing happens.
//! `SvgParseError` from the core surfaces as 400 with the parser message;
//! malformed path data inside an otherwise valid document never errors here
//! because the core degrades it per path.

use std::collections::{BTreeMap, BTreeSet};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use svgpaths::{AnimationEdit, PathRecord, SvgParseError};

use crate::state::AppState;

#[derive(Deserialize)]
pub struct ProcessSvgBody {
    pub svg_code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProcessSvgResponse {
    pub paths: Vec<PathRecord>,
    pub updated_svg: String,
}

/// `POST /api/process-svg` — parse SVG text into the path table.
pub async fn process_svg(
    Json(body): Json<ProcessSvgBody>,
) -> Result<Json<ProcessSvgResponse>, (StatusCode, String)> {
    let svg_code = require_svg_code(body.svg_code.as_deref())?;
    let (updated_svg, paths) = svgpaths::build_table(svg_code).map_err(parse_error_response)?;
    Ok(Json(ProcessSvgResponse { paths, updated_svg }))
}

#[derive(Deserialize)]
pub struct ReversePathsBody {
    pub svg_code: Option<String>,
    #[serde(default)]
    pub paths_to_reverse: Vec<usize>,
    /// Per-path animation edits keyed by path index.
    #[serde(default)]
    pub animations: BTreeMap<usize, AnimationEdit>,
}

#[derive(Debug, Serialize)]
pub struct ReversePathsResponse {
    pub updated_svg: String,
}

/// `POST /api/reverse-paths` — apply reversals and animation edits.
pub async fn reverse_paths(
    Json(body): Json<ReversePathsBody>,
) -> Result<Json<ReversePathsResponse>, (StatusCode, String)> {
    let svg_code = require_svg_code(body.svg_code.as_deref())?;
    let indices: BTreeSet<usize> = body.paths_to_reverse.iter().copied().collect();
    let updated_svg =
        svgpaths::apply_edits(svg_code, &indices, &body.animations).map_err(parse_error_response)?;
    Ok(Json(ReversePathsResponse { updated_svg }))
}

#[derive(Serialize)]
pub struct DefaultSvgResponse {
    pub svg_code: String,
}

/// `GET /api/default-svg` — the bundled starter SVG; empty when the file is
/// missing, never an error.
pub async fn default_svg(State(state): State<AppState>) -> Json<DefaultSvgResponse> {
    let path = state.static_dir.join("svg").join("hello.svg");
    let svg_code = tokio::fs::read_to_string(path).await.unwrap_or_default();
    Json(DefaultSvgResponse { svg_code })
}

/// Reject a missing or blank `svg_code` before any parsing is attempted.
pub(crate) fn require_svg_code(svg_code: Option<&str>) -> Result<&str, (StatusCode, String)> {
    match svg_code {
        Some(code) if !code.trim().is_empty() => Ok(code),
        _ => Err((
            StatusCode::BAD_REQUEST,
            "No SVG content received!".to_owned(),
        )),
    }
}

pub(crate) fn parse_error_response(err: SvgParseError) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, format!("Error parsing SVG: {err}"))
}

#[cfg(test)]
#[path = "svg_test.rs"]
mod tests;
