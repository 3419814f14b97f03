//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! core SVG pipeline is stateless — every request parses its own document —
//! so the state carries nothing but immutable deployment configuration.

use std::path::PathBuf;

#[derive(Clone)]
pub struct AppState {
    /// Directory holding the browser front-end and the bundle templates.
    pub static_dir: PathBuf,
}

impl AppState {
    #[must_use]
    pub fn new(static_dir: PathBuf) -> Self {
        Self { static_dir }
    }

    /// `STATIC_DIR` env override, defaulting to the crate's `static/`
    /// directory for local development.
    #[must_use]
    pub fn from_env() -> Self {
        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"));
        Self::new(static_dir)
    }
}
