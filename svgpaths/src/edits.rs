//! Path mutator: the write pass over an SVG document.
//!
//! Applies a set of direction reversals and per-path animation-token updates
//! in one parse/serialize cycle. Index assignment uses the exact same
//! document-order walk as [`crate::table::build_table`] — that shared
//! ordering is what makes indices from a previous read pass meaningful here.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::codec;
use crate::document::{SvgDocument, SvgParseError};
use crate::geometry;

/// Requested animation fields for one path. An absent field removes the
/// corresponding token.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AnimationEdit {
    pub duration: Option<String>,
    pub delay: Option<String>,
    pub easing: Option<String>,
}

/// Apply reversals and animation edits, returning the updated SVG text.
///
/// Per path at index `i`: when `i` is in `indices_to_reverse` and the `d`
/// attribute is present and parses, `d` is replaced by its direction-reversed
/// equivalent; a missing or malformed `d` makes that reversal a no-op. When
/// `i` has an entry in `animation_edits`, the current `class` is decoded, the
/// three animation fields are overwritten from the edit and the attribute is
/// re-encoded — or removed entirely when no tokens remain.
///
/// Out-of-range indices in either input are silently ignored: the index
/// space is derived from the document, so a stale index is a client-side
/// synchronization issue, not a document-integrity problem.
///
/// # Errors
///
/// [`SvgParseError`] when the input text cannot be parsed.
pub fn apply_edits(
    svg_text: &str,
    indices_to_reverse: &BTreeSet<usize>,
    animation_edits: &BTreeMap<usize, AnimationEdit>,
) -> Result<String, SvgParseError> {
    let mut doc = SvgDocument::parse(svg_text)?;

    for (index, el) in doc.path_elements_mut().into_iter().enumerate() {
        if indices_to_reverse.contains(&index) {
            let reversed = el
                .attribute("d")
                .and_then(|d| geometry::parse(d).ok())
                .map(|geo| geometry::to_path_data(&geometry::reverse(&geo)));
            if let Some(d) = reversed {
                el.set_attribute("d", &d);
            }
        }

        if let Some(edit) = animation_edits.get(&index) {
            let decoded = el.attribute("class").map(codec::decode).unwrap_or_default();
            let class = codec::encode(
                &decoded.visible,
                edit.duration.as_deref(),
                edit.delay.as_deref(),
                edit.easing.as_deref(),
            );
            match class {
                Some(class) => el.set_attribute("class", &class),
                None => el.remove_attribute("class"),
            }
        }
    }

    Ok(doc.serialize())
}

#[cfg(test)]
#[path = "edits_test.rs"]
mod tests;
