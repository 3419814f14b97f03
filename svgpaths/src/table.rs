//! Path table builder: the read pass over an SVG document.
//!
//! One record per `<path>` element, indexed `0..N-1` in document order. The
//! index is the only identity a path has and it is recomputed from the text
//! on every call — records are never valid across edits that add or remove
//! paths.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::codec;
use crate::document::{Element, SvgDocument, SvgParseError};
use crate::geometry;

/// Wire value for a start point that could not be computed (missing or
/// malformed `d`). The front-end consumer renders this string as-is.
pub const START_NOT_AVAILABLE: &str = "N/A";

/// One row of the path table. Field names are wire-exact: the front-end
/// consumer depends on `d`, `start`, `attributes`, `index` and the optional
/// `id` / `class` / `duration` / `delay` / `easing`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PathRecord {
    pub d: Option<String>,
    /// Start coordinate formatted `"(x.xxxxxx, y.yyyyyy)"`, or
    /// [`START_NOT_AVAILABLE`].
    pub start: String,
    /// Full raw attribute map, document order preserved.
    pub attributes: Map<String, Value>,
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Visible class tokens only; animation tokens are split out below.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
}

/// Parse SVG text and list every path element as a [`PathRecord`].
///
/// Returns the re-serialized (normalized) SVG text alongside the records;
/// callers use the parse+serialize cycle as a canonicalization step.
///
/// A path whose `d` does not parse still gets a record — its `start`
/// degrades to [`START_NOT_AVAILABLE`] instead of failing the whole table.
///
/// # Errors
///
/// [`SvgParseError`] when the document itself cannot be parsed.
pub fn build_table(svg_text: &str) -> Result<(String, Vec<PathRecord>), SvgParseError> {
    let doc = SvgDocument::parse(svg_text)?;
    let records = doc
        .path_elements()
        .into_iter()
        .enumerate()
        .map(|(index, el)| record_for(index, el))
        .collect();
    Ok((doc.serialize(), records))
}

fn record_for(index: usize, el: &Element) -> PathRecord {
    let d = el.attribute("d").map(str::to_owned);
    let start = d
        .as_deref()
        .map_or_else(|| START_NOT_AVAILABLE.to_owned(), start_display);
    let decoded = el.attribute("class").map(codec::decode).unwrap_or_default();
    let attributes: Map<String, Value> = el
        .attributes()
        .map(|(k, v)| (k.to_owned(), Value::String(v.to_owned())))
        .collect();

    PathRecord {
        d,
        start,
        attributes,
        index,
        id: el.attribute("id").map(str::to_owned),
        class: decoded.visible_class(),
        duration: decoded.duration,
        delay: decoded.delay,
        easing: decoded.easing,
    }
}

fn start_display(d: &str) -> String {
    geometry::parse(d).map_or_else(
        |_| START_NOT_AVAILABLE.to_owned(),
        |geo| geometry::point_at(&geo, 0.0).display(),
    )
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
