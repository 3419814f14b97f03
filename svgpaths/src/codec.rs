//! Animation timing tokens smuggled through SVG `class` attributes.
//!
//! The browser-side animation script reads per-path timing from class tokens
//! shaped like `duration-0_5`, `delay-1`, `ease-in_out`. Values swap `.` for
//! `_` so they stay valid class names; decoding reverses the swap exactly.
//! Every other class token is "visible" and passes through untouched, in
//! order. Encode/decode are exact inverses, so stripping and re-merging
//! tokens is idempotent.

const DURATION_PREFIX: &str = "duration-";
const DELAY_PREFIX: &str = "delay-";
const EASE_PREFIX: &str = "ease-";

/// A `class` attribute split into visible tokens and animation fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedClass {
    /// Non-animation class tokens, original order preserved.
    pub visible: Vec<String>,
    pub duration: Option<String>,
    pub delay: Option<String>,
    pub easing: Option<String>,
}

impl DecodedClass {
    /// Visible tokens joined back into a class string, `None` when there are
    /// none.
    #[must_use]
    pub fn visible_class(&self) -> Option<String> {
        if self.visible.is_empty() {
            None
        } else {
            Some(self.visible.join(" "))
        }
    }
}

/// Split a `class` attribute value on whitespace and extract animation
/// tokens.
///
/// Duplicate tokens of one kind are not an error: the last one encountered
/// wins, matching how the browser script applies them.
#[must_use]
pub fn decode(class_attr: &str) -> DecodedClass {
    let mut decoded = DecodedClass::default();
    for token in class_attr.split_whitespace() {
        if let Some(value) = token.strip_prefix(DURATION_PREFIX) {
            decoded.duration = Some(decode_value(value));
        } else if let Some(value) = token.strip_prefix(DELAY_PREFIX) {
            decoded.delay = Some(decode_value(value));
        } else if let Some(value) = token.strip_prefix(EASE_PREFIX) {
            decoded.easing = Some(decode_value(value));
        } else {
            decoded.visible.push(token.to_owned());
        }
    }
    decoded
}

/// Assemble a `class` attribute value: visible tokens first, then duration,
/// delay and easing tokens in that fixed order.
///
/// Returns `None` when the token list comes out empty; the caller must then
/// remove the `class` attribute entirely rather than write an empty one.
#[must_use]
pub fn encode(
    visible: &[String],
    duration: Option<&str>,
    delay: Option<&str>,
    easing: Option<&str>,
) -> Option<String> {
    let mut tokens: Vec<String> = visible.to_vec();
    if let Some(value) = duration {
        tokens.push(format!("{DURATION_PREFIX}{}", encode_value(value)));
    }
    if let Some(value) = delay {
        tokens.push(format!("{DELAY_PREFIX}{}", encode_value(value)));
    }
    if let Some(value) = easing {
        tokens.push(format!("{EASE_PREFIX}{}", encode_value(value)));
    }
    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(" "))
    }
}

fn encode_value(value: &str) -> String {
    value.replace('.', "_")
}

fn decode_value(value: &str) -> String {
    value.replace('_', ".")
}

#[cfg(test)]
#[path = "codec_test.rs"]
mod tests;
