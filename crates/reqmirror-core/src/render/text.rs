//! Fixed-width text presenter.

use crate::describe::RequestDescription;
use crate::error::{ReqMirrorError, Result};

use super::width_chars;

/// Pretty-print a description, hard-wrapped to the canvas character width.
///
/// Key order is declaration order, never alphabetized; the skip rules on the
/// description types mean stripped fields simply do not appear.
pub fn render(d: &RequestDescription) -> Result<String> {
    let pretty = serde_json::to_string_pretty(d)
        .map_err(|e| ReqMirrorError::Internal(format!("description serialize failed: {e}")))?;
    Ok(wrap(&pretty, width_chars()))
}

/// Hard-wrap each line of `text` at `width` characters.
pub fn wrap(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let mut count = 0;
        for ch in line.chars() {
            if count == width {
                out.push('\n');
                count = 0;
            }
            out.push(ch);
            count += 1;
        }
    }
    out
}
