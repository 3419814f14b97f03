use super::*;

use std::path::PathBuf;

#[test]
fn missing_template_maps_to_not_found() {
    let err = BundleError::TemplateMissing(PathBuf::from("/nowhere/anim.mjs"));
    let (status, message) = bundle_error_response(err);
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(message.contains("anim.mjs"));
}

#[test]
fn archive_failure_maps_to_internal_error() {
    let err = BundleError::Archive(zip::result::ZipError::FileNotFound);
    let (status, _) = bundle_error_response(err);
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn download_rejects_blank_svg_before_touching_templates() {
    let state = AppState::new(PathBuf::from("/nonexistent"));
    let body = DownloadAnimationBody {
        svg_code: Some("  ".to_owned()),
        animation_scale: 1.0,
    };
    let (status, _) = download_animation(State(state), Json(body))
        .await
        .expect_err("should reject");
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn download_reports_missing_templates_as_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let state = AppState::new(dir.path().to_owned());
    let body = DownloadAnimationBody {
        svg_code: Some("<svg/>".to_owned()),
        animation_scale: 1.0,
    };
    let (status, _) = download_animation(State(state), Json(body))
        .await
        .expect_err("should fail");
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test]
fn animation_scale_defaults_to_one() {
    let body: DownloadAnimationBody =
        serde_json::from_str(r#"{"svg_code":"<svg/>"}"#).expect("deserialize");
    assert!((body.animation_scale - 1.0).abs() < f64::EPSILON);
}
