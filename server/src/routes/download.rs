//! Animated-SVG bundle download route.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::routes::svg::require_svg_code;
use crate::services::bundle::{self, BundleError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct DownloadAnimationBody {
    pub svg_code: Option<String>,
    /// Timeline speed multiplier baked into the exported page.
    #[serde(default = "default_scale")]
    pub animation_scale: f64,
}

fn default_scale() -> f64 {
    1.0
}

/// `POST /api/download-animation` — package the final SVG into a
/// self-contained zip bundle.
pub async fn download_animation(
    State(state): State<AppState>,
    Json(body): Json<DownloadAnimationBody>,
) -> Result<Response, (StatusCode, String)> {
    let svg_code = require_svg_code(body.svg_code.as_deref())?;
    let bytes = bundle::build_bundle(&state.static_dir, svg_code, body.animation_scale)
        .map_err(bundle_error_response)?;

    Ok((
        [
            (CONTENT_TYPE, "application/zip"),
            (
                CONTENT_DISPOSITION,
                "attachment; filename=\"animation.zip\"",
            ),
        ],
        bytes,
    )
        .into_response())
}

pub(crate) fn bundle_error_response(err: BundleError) -> (StatusCode, String) {
    let status = match err {
        BundleError::TemplateMissing(_) => StatusCode::NOT_FOUND,
        BundleError::TemplateRead { .. } | BundleError::Archive(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, err.to_string())
}

#[cfg(test)]
#[path = "download_test.rs"]
mod tests;
