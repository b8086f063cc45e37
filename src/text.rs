//! Text transformations shared by the emitter: newline escaping, HTML
//! escaping, ANSI-to-HTML conversion, and stack-trace suffix stripping.
//!
//! Every function here is total over arbitrary strings; malformed input
//! passes through rather than erroring.

use once_cell::sync::Lazy;
use regex::Regex;

/// Token substituted for literal newlines so multi-line payloads stay on a
/// single protocol line.
pub const LF_TOKEN: &str = "<:LF:>";

/// A run of stack frame lines, each starting with exactly four spaces and
/// `at `. Four spaces is what the host runner emits; other indentations are
/// deliberately not recognized.
static STACK_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:\n {4}at .*)+").unwrap());

/// Replaces every literal newline with the `<:LF:>` token.
pub fn escape_lf(s: &str) -> String {
    s.replace('\n', LF_TOKEN)
}

/// Escapes `&`, `<` and `>` only. Runs before ANSI conversion, which must
/// not see raw markup characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Converts ANSI SGR styling in `s` to HTML markup, HTML-escaping the text
/// first. The converter's own escaping is disabled so it cannot re-escape
/// the entities; if conversion fails the escaped text is returned as-is.
pub fn ansi_to_html(s: &str) -> String {
    let escaped = escape_html(s);
    ansi_to_html::Converter::new()
        .skip_escape(true)
        .convert(&escaped)
        .unwrap_or(escaped)
}

/// Removes the stack-trace block, and the newline introducing it, from a
/// failure message. Messages without a recognizable block are untouched.
pub fn strip_stack_suffix(s: &str) -> String {
    match STACK_SUFFIX.find(s) {
        Some(m) => {
            let mut out = String::with_capacity(s.len() - m.len());
            out.push_str(&s[..m.start()]);
            out.push_str(&s[m.end()..]);
            out
        }
        None => s.to_string(),
    }
}

/// Flattens a test's failure messages into one block: stack suffixes
/// stripped, messages separated by a blank line, surrounding whitespace
/// trimmed.
pub fn collect_failure_messages(messages: &[String]) -> String {
    let stripped: Vec<String> = messages.iter().map(|m| strip_stack_suffix(m)).collect();
    stripped.join("\n\n").trim().to_string()
}
