//! Inline markdown → styled runs.
//!
//! Supported dialect, matched left to right in a single pass:
//! - `**text**` → bold run
//! - `*text*` → italic run
//! - anything else → plain run, verbatim
//!
//! Rendering never fails. A `*` that cannot open an emphasis span is kept as
//! literal text. Nested or overlapping emphasis (`**bold *and* italic**`) is
//! not supported; the output for such input is unspecified.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::docx::Run;

/// Alternation order is precedence order: bold, italic, plain text, stray `*`.
static INLINE_MARKDOWN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*(?P<bold>.+?)\*\*|\*(?P<italic>.+?)\*|(?P<plain>[^*]+|\*)")
        .expect("inline markdown pattern is valid")
});

/// Renders one line of inline markdown into runs, in source order.
///
/// Adjacent plain fragments are merged, so a line without emphasis yields a
/// single plain run.
pub fn render_inline(text: &str) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();

    for caps in INLINE_MARKDOWN.captures_iter(text) {
        if let Some(bold) = caps.name("bold") {
            runs.push(Run::bold(bold.as_str()));
        } else if let Some(italic) = caps.name("italic") {
            runs.push(Run::italic(italic.as_str()));
        } else if let Some(plain) = caps.name("plain") {
            match runs.last_mut() {
                Some(last) if last.is_unformatted() => last.text.push_str(plain.as_str()),
                _ => runs.push(Run::plain(plain.as_str())),
            }
        }
    }

    runs
}
