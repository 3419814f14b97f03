//! SVG path inspection and mutation.
//!
//! This crate owns the pure transformation pipeline used by `server`: parse
//! raw SVG text (full document or bare fragment, possibly malformed) into an
//! owned tree, enumerate `<path>` elements regardless of namespace prefix,
//! evaluate each path's starting coordinate from its `d` geometry, split
//! animation timing tokens out of `class` attributes, reverse drawing
//! direction on request, and re-serialize back to well-formed SVG text.
//!
//! ARCHITECTURE
//! ============
//! Leaves first: `geometry` (path-data evaluation/reversal) and `codec`
//! (animation class tokens) know nothing about XML. `document` owns the
//! tolerant parse/serialize cycle. `table` and `edits` orchestrate the three
//! for the read and write passes respectively, and both assign path indices
//! with the identical document-order walk — that shared ordering is the
//! correctness contract between them.
//!
//! Everything is synchronous and stateless: each operation parses its own
//! document from the input text and drops it when done. Indices are derived
//! from document structure, so they are recomputed on every parse and are
//! never valid across edits that add or remove paths.

pub mod codec;
pub mod document;
pub mod edits;
pub mod geometry;
pub mod table;

pub use codec::DecodedClass;
pub use document::{Element, SvgDocument, SvgParseError};
pub use edits::{AnimationEdit, apply_edits};
pub use geometry::{PathDataError, PathGeometry, Point};
pub use table::{PathRecord, build_table};
