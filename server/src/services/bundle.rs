//! Downloadable animation bundle packaging.
//!
//! The export is a self-contained page: the shared animation module plus an
//! `index.html` with the user's SVG and timeline scale substituted into the
//! template. Substitution is plain string replacement against two fixed
//! placeholders; the SVG arrives already valid and self-contained, with
//! animation timing embedded as class tokens by the core.

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use zip::result::ZipError;
use zip::write::SimpleFileOptions;

/// Marker in the template replaced by the final SVG markup.
const SVG_PLACEHOLDER: &str = "<!-- SVG_PLACEHOLDER -->";
/// Marker in the template replaced by the numeric timeline scale.
const SCALE_PLACEHOLDER: &str = "__ANIMATION_SCALE__";

#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    #[error("bundle template missing: {}", .0.display())]
    TemplateMissing(PathBuf),
    #[error("failed to read bundle template {}: {source}", path.display())]
    TemplateRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write bundle archive: {0}")]
    Archive(#[from] ZipError),
}

/// Build the downloadable zip (`index.html` + `anim.mjs`) in memory.
///
/// # Errors
///
/// [`BundleError::TemplateMissing`] / [`BundleError::TemplateRead`] when the
/// template files cannot be loaded, [`BundleError::Archive`] on zip failure.
pub fn build_bundle(
    static_dir: &Path,
    svg: &str,
    animation_scale: f64,
) -> Result<Vec<u8>, BundleError> {
    let anim_mjs = read_template(&static_dir.join("js").join("anim.mjs"))?;
    let template = read_template(&static_dir.join("zip_files").join("index.html"))?;

    let index_html = template
        .replace(SVG_PLACEHOLDER, svg)
        .replace(SCALE_PLACEHOLDER, &format!("{animation_scale}"));

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    add_file(&mut writer, "index.html", &index_html, options)?;
    add_file(&mut writer, "anim.mjs", &anim_mjs, options)?;

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

fn add_file(
    writer: &mut zip::ZipWriter<Cursor<Vec<u8>>>,
    name: &str,
    contents: &str,
    options: SimpleFileOptions,
) -> Result<(), BundleError> {
    writer.start_file(name, options)?;
    writer
        .write_all(contents.as_bytes())
        .map_err(ZipError::from)?;
    Ok(())
}

fn read_template(path: &Path) -> Result<String, BundleError> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            BundleError::TemplateMissing(path.to_owned())
        } else {
            BundleError::TemplateRead {
                path: path.to_owned(),
                source,
            }
        }
    })
}

#[cfg(test)]
#[path = "bundle_test.rs"]
mod tests;
