//! Removes template invocations (`{{...}}`).
//!
//! Open `{{` are kept on a stack, so that the whole outermost invocation is dropped:
//! ```text
//! foo {{Infobox|name={{lang|ja|東京}}}} bar
//! ```
//! becomes `foo  bar`.
//!
//! Unclosed `{{` are kept as-is. The text is scanned once.
use crate::error::Error;

use super::Transform;

#[derive(Default)]
pub struct Templates;

impl Templates {
    /// Strips balanced templates from `text`.
    ///
    /// Each `{{` is copied to the output and its output position is pushed.
    /// A matching `}}` truncates the output back to that position, which drops
    /// the invocation together with everything nested in it.
    fn strip_balanced(text: &str) -> String {
        let bytes = text.as_bytes();
        let mut out = String::with_capacity(text.len());
        let mut open: Vec<usize> = Vec::new();
        let mut copied = 0;
        let mut i = 0;

        // braces are ASCII, so every index we slice at is a char boundary.
        while i < bytes.len() {
            if bytes[i..].starts_with(b"{{") {
                out.push_str(&text[copied..i]);
                open.push(out.len());
                out.push_str("{{");
                i += 2;
                copied = i;
            } else if bytes[i..].starts_with(b"}}") && !open.is_empty() {
                out.push_str(&text[copied..i]);
                if let Some(at) = open.pop() {
                    out.truncate(at);
                }
                i += 2;
                copied = i;
            } else {
                i += 1;
            }
        }
        out.push_str(&text[copied..]);

        out
    }
}

impl Transform for Templates {
    fn transform_own(&self, text: String) -> Result<String, Error> {
        if !text.contains("{{") {
            return Ok(text);
        }

        Ok(Self::strip_balanced(&text))
    }
}
